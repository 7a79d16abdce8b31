//! # msgsimple Common
//!
//! Shared error types, logging setup and test helpers for the msgsimple
//! workspace.
//!
//! Every crate in the workspace reports failures through [`MsgSimpleError`]
//! and emits diagnostics through `tracing`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{MsgSimpleError, Result};
pub use logging::{init_logging, LoggingConfig};
