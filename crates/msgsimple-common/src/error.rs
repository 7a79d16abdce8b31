//! Error types and utilities for msgsimple

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for msgsimple operations
pub type Result<T> = std::result::Result<T, MsgSimpleError>;

/// Main error type for msgsimple operations
#[derive(Error, Debug)]
pub enum MsgSimpleError {
    /// A required argument was absent.
    ///
    /// `code` is the internal message code (for instance `cfg.map.nullKey`)
    /// and `message` the human-readable text resolved for it.
    #[error("{message}")]
    InvalidArgument { code: String, message: String },

    /// A message table could not be read
    #[error("failed to read message table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A message table could not be parsed
    #[error("failed to parse {format} message table: {message}")]
    Parse {
        format: &'static str,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A message table has an extension no loader understands
    #[error("unsupported message table format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl MsgSimpleError {
    /// Create a new invalid argument error
    pub fn invalid_argument(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new parse error with source
    pub fn parse_with_source(
        format: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Parse {
            format,
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this is an [`MsgSimpleError::InvalidArgument`]
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// The internal message code, for invalid argument errors
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { code, .. } => Some(code),
            _ => None,
        }
    }
}
