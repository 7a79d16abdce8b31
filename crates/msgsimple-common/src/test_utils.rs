//! Test utilities and shared fixtures for the msgsimple workspace.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for the tests of every other crate in the workspace.

use crate::logging::LoggingConfig;
use std::sync::Once;

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let config = LoggingConfig {
            level: std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()),
            ..LoggingConfig::default()
        };

        // Another test harness may already own the global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(config.env_filter())
            .try_init();
    });
}

/// Message table fixtures.
pub mod message_fixtures {
    use std::collections::{BTreeMap, HashMap};

    /// A small, fully valid message table.
    pub fn greetings() -> HashMap<String, String> {
        HashMap::from([
            ("greeting".to_string(), "hello".to_string()),
            ("farewell".to_string(), "bye".to_string()),
            ("thanks".to_string(), "thank you".to_string()),
        ])
    }

    /// A table with one absent message among otherwise valid entries.
    pub fn greetings_with_missing_message() -> HashMap<String, Option<String>> {
        let mut table: HashMap<String, Option<String>> = greetings()
            .into_iter()
            .map(|(key, message)| (key, Some(message)))
            .collect();
        table.insert("broken".to_string(), None);
        table
    }

    /// A table with one absent key among otherwise valid entries.
    pub fn greetings_with_missing_key() -> HashMap<Option<String>, String> {
        let mut table: HashMap<Option<String>, String> = greetings()
            .into_iter()
            .map(|(key, message)| (Some(key), message))
            .collect();
        table.insert(None, "orphan".to_string());
        table
    }

    /// Ordered pairs whose third entry has an absent message.
    pub fn pairs_failing_at_third() -> Vec<(&'static str, Option<&'static str>)> {
        vec![
            ("first", Some("one")),
            ("second", Some("two")),
            ("third", None),
            ("fourth", Some("four")),
        ]
    }

    /// A sorted table, handy when iteration order matters.
    pub fn sorted_greetings() -> BTreeMap<String, String> {
        greetings().into_iter().collect()
    }
}
