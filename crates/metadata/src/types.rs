//! Metadata maps handed to and produced by the sanitizer.
//!
//! Keys are case-sensitive and kept in sorted order so that serialized output
//! and debug logs are stable across runs.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Raw metadata as read from a document's info dictionary.
///
/// A key may be present without a value (the reader saw the entry but could
/// not decode it); [`RawMetadata::get`] treats that the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMetadata(BTreeMap<String, Option<String>>);

impl RawMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a present value, replacing any previous entry for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), Some(value.into()));
    }

    /// Inserts an entry whose value may be missing.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0.insert(key.into(), value);
    }

    /// Returns the raw value for `key`, if the key exists and carries one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl<K, V> FromIterator<(K, V)> for RawMetadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}

impl From<HashMap<String, String>> for RawMetadata {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BTreeMap<String, Option<String>>> for RawMetadata {
    fn from(map: BTreeMap<String, Option<String>>) -> Self {
        Self(map)
    }
}

/// Sanitized metadata: one entry per requested key, `None` when absent.
///
/// Values are trimmed and never empty. Built once by
/// [`sanitize`](crate::sanitize) and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CleanMetadata(BTreeMap<String, Option<String>>);

impl CleanMetadata {
    pub(crate) fn from_entries(entries: BTreeMap<String, Option<String>>) -> Self {
        Self(entries)
    }

    /// Cleaned value for `key`; `None` when the key was not requested or the
    /// raw value was missing or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.as_deref())
    }

    /// Whether `key` was part of the requested key set.
    pub fn was_requested(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of requested keys that ended up with a value.
    pub fn present_count(&self) -> usize {
        self.0.values().filter(|value| value.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn title(&self) -> Option<&str> {
        self.get(crate::keys::TITLE)
    }

    pub fn keywords(&self) -> Option<&str> {
        self.get(crate::keys::KEYWORDS)
    }

    pub fn subject(&self) -> Option<&str> {
        self.get(crate::keys::SUBJECT)
    }
}
