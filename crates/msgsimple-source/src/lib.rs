//! # msgsimple Source
//!
//! Key/message lookup sources for a localized messaging framework.
//!
//! A [`MessageSource`] answers one question: which message belongs to this
//! key. [`MapMessageSource`] is the map-backed implementation. It is
//! immutable once built and can only be assembled through its [`Builder`],
//! which rejects absent keys, messages and maps.
//!
//! # Example
//!
//! ```rust
//! use msgsimple_source::{MapMessageSource, MessageSource};
//!
//! # fn example() -> msgsimple_source::Result<()> {
//! let source = MapMessageSource::new_builder()
//!     .put("greeting", "hello")?
//!     .put("farewell", "bye")?
//!     .build();
//!
//! assert_eq!(source.get_key("greeting").as_deref(), Some("hello"));
//! assert_eq!(source.get_key("unknown"), None);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod internal;
pub mod loader;
pub mod map;
pub mod source;
pub mod text;

pub use internal::InternalBundle;
pub use loader::{load_json_str, load_path, load_toml_str, MessageTable, TableFormat};
pub use map::{Builder, MapMessageSource};
pub use source::MessageSource;
pub use text::{IntoMessagePairs, IntoMessageText};

pub use msgsimple_common::{MsgSimpleError, Result};
