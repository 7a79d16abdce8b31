//! Conversions accepted by the builder for keys, messages and pair collections
//!
//! Both traits can express an absent value: `None` for a key or message, and
//! `None` for a whole collection. The builder turns absence into an
//! [`InvalidArgument`](msgsimple_common::MsgSimpleError::InvalidArgument)
//! error.

use std::borrow::Cow;
use std::collections::{btree_map, hash_map, BTreeMap, HashMap};

/// A key or message that may be absent
pub trait IntoMessageText {
    /// Converts into owned text, or `None` when absent
    fn into_message_text(self) -> Option<String>;
}

impl IntoMessageText for String {
    fn into_message_text(self) -> Option<String> {
        Some(self)
    }
}

impl IntoMessageText for &String {
    fn into_message_text(self) -> Option<String> {
        Some(self.clone())
    }
}

impl IntoMessageText for &str {
    fn into_message_text(self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl IntoMessageText for &&str {
    fn into_message_text(self) -> Option<String> {
        Some((*self).to_owned())
    }
}

impl IntoMessageText for Cow<'_, str> {
    fn into_message_text(self) -> Option<String> {
        Some(self.into_owned())
    }
}

impl IntoMessageText for Box<str> {
    fn into_message_text(self) -> Option<String> {
        Some(self.into_string())
    }
}

impl IntoMessageText for char {
    fn into_message_text(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl<T: IntoMessageText> IntoMessageText for Option<T> {
    fn into_message_text(self) -> Option<String> {
        self.and_then(IntoMessageText::into_message_text)
    }
}

impl<'a, T> IntoMessageText for &'a Option<T>
where
    &'a T: IntoMessageText,
{
    fn into_message_text(self) -> Option<String> {
        self.as_ref().and_then(IntoMessageText::into_message_text)
    }
}

/// A collection of key/message pairs that may itself be absent
pub trait IntoMessagePairs {
    /// Key type yielded by the collection
    type Key: IntoMessageText;
    /// Message type yielded by the collection
    type Message: IntoMessageText;
    /// Iterator over the pairs, in the collection's natural order
    type Pairs: Iterator<Item = (Self::Key, Self::Message)>;

    /// Converts into an iterator of pairs, or `None` when absent
    fn into_message_pairs(self) -> Option<Self::Pairs>;
}

impl<K: IntoMessageText, V: IntoMessageText, S> IntoMessagePairs for HashMap<K, V, S> {
    type Key = K;
    type Message = V;
    type Pairs = hash_map::IntoIter<K, V>;

    fn into_message_pairs(self) -> Option<Self::Pairs> {
        Some(self.into_iter())
    }
}

impl<'a, K, V, S> IntoMessagePairs for &'a HashMap<K, V, S>
where
    &'a K: IntoMessageText,
    &'a V: IntoMessageText,
{
    type Key = &'a K;
    type Message = &'a V;
    type Pairs = hash_map::Iter<'a, K, V>;

    fn into_message_pairs(self) -> Option<Self::Pairs> {
        Some(self.iter())
    }
}

impl<K: IntoMessageText, V: IntoMessageText> IntoMessagePairs for BTreeMap<K, V> {
    type Key = K;
    type Message = V;
    type Pairs = btree_map::IntoIter<K, V>;

    fn into_message_pairs(self) -> Option<Self::Pairs> {
        Some(self.into_iter())
    }
}

impl<'a, K, V> IntoMessagePairs for &'a BTreeMap<K, V>
where
    &'a K: IntoMessageText,
    &'a V: IntoMessageText,
{
    type Key = &'a K;
    type Message = &'a V;
    type Pairs = btree_map::Iter<'a, K, V>;

    fn into_message_pairs(self) -> Option<Self::Pairs> {
        Some(self.iter())
    }
}

impl<K: IntoMessageText, V: IntoMessageText> IntoMessagePairs for Vec<(K, V)> {
    type Key = K;
    type Message = V;
    type Pairs = std::vec::IntoIter<(K, V)>;

    fn into_message_pairs(self) -> Option<Self::Pairs> {
        Some(self.into_iter())
    }
}

impl<K: IntoMessageText, V: IntoMessageText, const N: usize> IntoMessagePairs for [(K, V); N] {
    type Key = K;
    type Message = V;
    type Pairs = std::array::IntoIter<(K, V), N>;

    fn into_message_pairs(self) -> Option<Self::Pairs> {
        Some(self.into_iter())
    }
}

impl<M: IntoMessagePairs> IntoMessagePairs for Option<M> {
    type Key = M::Key;
    type Message = M::Message;
    type Pairs = M::Pairs;

    fn into_message_pairs(self) -> Option<Self::Pairs> {
        self.and_then(IntoMessagePairs::into_message_pairs)
    }
}
