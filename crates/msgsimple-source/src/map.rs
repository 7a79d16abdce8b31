//! Map-backed message source and its builder

use crate::internal::{codes, InternalBundle};
use crate::source::MessageSource;
use crate::text::{IntoMessagePairs, IntoMessageText};
use msgsimple_common::Result;
use serde::Serialize;
use std::collections::{hash_map, HashMap};
use tracing::{debug, warn};

/// A message source backed by a key/message map.
///
/// Immutable once built. Use [`MapMessageSource::new_builder`] to create one:
///
/// ```rust
/// use msgsimple_source::{MapMessageSource, MessageSource};
/// use std::collections::HashMap;
///
/// # fn example() -> msgsimple_source::Result<()> {
/// let existing = HashMap::from([("key3", "message3")]);
/// let source = MapMessageSource::new_builder()
///     .put("key1", "message1")?
///     .put("key2", "message2")?
///     .put_all(&existing)?
///     .build();
///
/// assert_eq!(source.get_key("key3").as_deref(), Some("message3"));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
///
/// Absent keys and messages are rejected when they are added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MapMessageSource {
    messages: HashMap<String, String>,
}

impl MapMessageSource {
    /// Create a new builder for a map message source
    pub fn new_builder() -> Builder {
        Builder::default()
    }

    /// Build a message source from a map directly.
    ///
    /// Unlike [`Builder::put_all`], every key and message is validated before
    /// anything is copied, so a single absent entry means no source at all.
    #[deprecated(since = "0.1.0", note = "use `MapMessageSource::new_builder` instead")]
    pub fn from_map<M: IntoMessagePairs>(map: M) -> Result<Self> {
        let bundle = InternalBundle::instance();
        let pairs = bundle.check_not_null(map.into_message_pairs(), codes::NULL_MAP)?;

        let messages = pairs
            .map(|(key, message)| -> Result<(String, String)> {
                Ok((
                    bundle.check_not_null(key.into_message_text(), codes::MAP_NULL_KEY)?,
                    bundle.check_not_null(message.into_message_text(), codes::MAP_NULL_VALUE)?,
                ))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        warn!(
            entries = messages.len(),
            "MapMessageSource::from_map is deprecated, use MapMessageSource::new_builder"
        );
        Ok(Self { messages })
    }

    /// Wraps an already validated map.
    pub(crate) const fn from_trusted(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    /// Borrowing lookup
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Whether a message exists for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the source holds no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// All key/message pairs, in no particular order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.messages.iter(),
        }
    }
}

impl MessageSource for MapMessageSource {
    fn get_key(&self, key: &str) -> Option<String> {
        self.messages.get(key).cloned()
    }
}

impl<'a> IntoIterator for &'a MapMessageSource {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the pairs of a [`MapMessageSource`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, message)| (key.as_str(), message.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Builder for a [`MapMessageSource`].
///
/// Building does not consume the builder: each [`Builder::build`] takes a
/// snapshot, and later changes to the builder never reach sources that were
/// already built.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    messages: HashMap<String, String>,
}

impl Builder {
    /// Add one key/message pair.
    ///
    /// This overrides the message if the key already existed. Fails without
    /// touching the builder if either the key or the message is absent.
    pub fn put<K, M>(&mut self, key: K, message: M) -> Result<&mut Self>
    where
        K: IntoMessageText,
        M: IntoMessageText,
    {
        let bundle = InternalBundle::instance();
        let key = bundle.check_not_null(key.into_message_text(), codes::MAP_NULL_KEY)?;
        let message = bundle.check_not_null(message.into_message_text(), codes::MAP_NULL_VALUE)?;

        self.messages.insert(key, message);
        Ok(self)
    }

    /// Add a collection of key/message pairs.
    ///
    /// This overrides the messages of already existing keys. Pairs are applied
    /// in the collection's iteration order; the first absent key or message
    /// stops the merge, and pairs applied before it are kept.
    pub fn put_all<M: IntoMessagePairs>(&mut self, map: M) -> Result<&mut Self> {
        let pairs =
            InternalBundle::instance().check_not_null(map.into_message_pairs(), codes::NULL_MAP)?;

        let mut merged = 0_usize;
        for (key, message) in pairs {
            self.put(key, message)?;
            merged += 1;
        }

        debug!(merged, total = self.messages.len(), "Merged messages into builder");
        Ok(self)
    }

    /// Number of messages accumulated so far
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether nothing has been added yet
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Build a new message source from the contents of this builder
    pub fn build(&self) -> MapMessageSource {
        debug!(entries = self.messages.len(), "Built map message source");
        MapMessageSource::from_trusted(self.messages.clone())
    }
}
