//! Catalog of the library's own validation messages

use crate::map::MapMessageSource;
use crate::source::MessageSource;
use msgsimple_common::{MsgSimpleError, Result};
use once_cell::sync::Lazy;

/// Message codes understood by the internal bundle
pub mod codes {
    /// A map or pair collection was absent
    pub const NULL_MAP: &str = "cfg.nullMap";
    /// A key inside a map message source was absent
    pub const MAP_NULL_KEY: &str = "cfg.map.nullKey";
    /// A message inside a map message source was absent
    pub const MAP_NULL_VALUE: &str = "cfg.map.nullValue";
}

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    (codes::NULL_MAP, "map must not be null"),
    (
        codes::MAP_NULL_KEY,
        "null keys are not allowed in a map message source",
    ),
    (
        codes::MAP_NULL_VALUE,
        "null values are not allowed in a map message source",
    ),
];

static BUNDLE: Lazy<InternalBundle> = Lazy::new(|| InternalBundle {
    source: MapMessageSource::from_trusted(
        DEFAULT_MESSAGES
            .iter()
            .map(|(code, message)| ((*code).to_string(), (*message).to_string()))
            .collect(),
    ),
});

/// Resolves message codes into the text carried by validation errors.
///
/// The catalog is itself a [`MapMessageSource`], populated once per process.
#[derive(Debug)]
pub struct InternalBundle {
    source: MapMessageSource,
}

impl InternalBundle {
    /// The process-wide bundle
    pub fn instance() -> &'static Self {
        &BUNDLE
    }

    /// Text for `code`, or the code itself when the catalog has no entry
    pub fn message(&self, code: &str) -> String {
        self.source
            .get_key(code)
            .unwrap_or_else(|| code.to_string())
    }

    /// Unwraps `reference`, failing with an invalid argument error carrying
    /// the message for `code` when it is absent.
    pub fn check_not_null<T>(&self, reference: Option<T>, code: &str) -> Result<T> {
        reference.ok_or_else(|| MsgSimpleError::invalid_argument(code, self.message(code)))
    }
}
