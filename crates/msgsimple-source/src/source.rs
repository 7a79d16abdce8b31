//! The message source abstraction

use std::sync::Arc;

/// Something that can look up a message by key.
///
/// A missing key is a normal outcome and yields `None`, never an error.
/// Implementations are shared between readers without synchronization, hence
/// the `Send + Sync` bound.
pub trait MessageSource: Send + Sync {
    /// Returns the message registered for `key`, if any
    fn get_key(&self, key: &str) -> Option<String>;
}

impl<T: MessageSource + ?Sized> MessageSource for &T {
    fn get_key(&self, key: &str) -> Option<String> {
        (**self).get_key(key)
    }
}

impl<T: MessageSource + ?Sized> MessageSource for Box<T> {
    fn get_key(&self, key: &str) -> Option<String> {
        (**self).get_key(key)
    }
}

impl<T: MessageSource + ?Sized> MessageSource for Arc<T> {
    fn get_key(&self, key: &str) -> Option<String> {
        (**self).get_key(key)
    }
}
