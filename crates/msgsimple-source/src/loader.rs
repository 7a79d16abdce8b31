//! Loading message tables from JSON or TOML documents
//!
//! A message table is a flat `key = message` document. Every entry goes
//! through [`Builder::put_all`](crate::Builder::put_all), so a JSON `null`
//! message fails the same way an absent message passed in code does.

use crate::map::MapMessageSource;
use msgsimple_common::{MsgSimpleError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Document formats a message table can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// A JSON object of strings
    Json,
    /// A TOML table of strings
    Toml,
}

impl TableFormat {
    /// Guess the format from a file extension, ignoring case
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Human-readable name of the format
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }
}

/// A parsed, not yet validated, message table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MessageTable {
    entries: BTreeMap<String, Option<String>>,
}

impl MessageTable {
    /// Parse a table from a JSON object
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input)
            .map_err(|e| MsgSimpleError::parse_with_source(TableFormat::Json.name(), e))
    }

    /// Parse a table from a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input)
            .map_err(|e| MsgSimpleError::parse_with_source(TableFormat::Toml.name(), e))
    }

    /// Parse a table written in `format`
    pub fn parse(input: &str, format: TableFormat) -> Result<Self> {
        match format {
            TableFormat::Json => Self::from_json_str(input),
            TableFormat::Toml => Self::from_toml_str(input),
        }
    }

    /// Number of entries, including absent messages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate the table and build a source from it
    pub fn into_source(self) -> Result<MapMessageSource> {
        let source = MapMessageSource::new_builder()
            .put_all(self.entries)?
            .build();
        Ok(source)
    }
}

/// Build a source from a JSON object of messages
pub fn load_json_str(input: &str) -> Result<MapMessageSource> {
    MessageTable::from_json_str(input)?.into_source()
}

/// Build a source from a TOML table of messages
pub fn load_toml_str(input: &str) -> Result<MapMessageSource> {
    MessageTable::from_toml_str(input)?.into_source()
}

/// Build a source from a `.json` or `.toml` file
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<MapMessageSource> {
    let path = path.as_ref();
    let format = TableFormat::from_path(path).ok_or_else(|| MsgSimpleError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    debug!("Loading {} message table: {:?}", format.name(), path);

    let content = fs::read_to_string(path).map_err(|e| MsgSimpleError::io(path, e))?;
    let source = MessageTable::parse(&content, format)?.into_source()?;

    info!(
        entries = source.len(),
        "Loaded message table: {:?}", path
    );
    Ok(source)
}
