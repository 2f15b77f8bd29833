// ABOUTME: Term entry model shared by the mapper, persistence, and CLI layers
// ABOUTME: A normalized source phrase paired with its verbatim target phrase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::vec;

/// A single source phrase / target phrase pair.
///
/// `source` is the canonical key: lower-cased with surrounding whitespace
/// trimmed. `target` is the display value and is kept exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermEntry {
    /// Normalized source-language phrase
    pub source: String,
    /// Target-language phrase, stored verbatim
    pub target: String,
}

impl TermEntry {
    /// Build an entry, normalizing the source phrase
    pub fn new(source: &str, target: impl Into<String>) -> Self {
        Self {
            source: normalize_phrase(source),
            target: target.into(),
        }
    }
}

/// Canonical form used for every key comparison: trimmed and lower-cased
#[must_use]
pub fn normalize_phrase(phrase: &str) -> String {
    phrase.trim().to_lowercase()
}

/// Insertion-ordered snapshot of term entries keyed by normalized source.
///
/// Serializes as a JSON object whose key order follows insertion order.
/// Deserializes from either that object form or an array of
/// `{ "source": ..., "target": ... }` objects. Inserting an existing key
/// replaces its target in place, so the key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermTable {
    entries: Vec<TermEntry>,
    /// Normalized key -> position in `entries`
    index: HashMap<String, usize>,
}

impl TermTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Target for a phrase, compared in normalized form
    #[must_use]
    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.index
            .get(&normalize_phrase(phrase))
            .map(|&position| self.entries[position].target.as_str())
    }

    /// Insert or overwrite an entry. The source is normalized on the way in,
    /// so entries built by hand land under the same key as [`TermEntry::new`].
    pub fn insert(&mut self, entry: TermEntry) {
        let TermEntry { source, target } = entry;
        let source = normalize_phrase(&source);
        if let Some(&position) = self.index.get(&source) {
            self.entries[position].target = target;
        } else {
            self.index.insert(source.clone(), self.entries.len());
            self.entries.push(TermEntry { source, target });
        }
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TermEntry> {
        self.entries.iter()
    }

    /// Entries in insertion order, as a slice
    #[must_use]
    pub fn entries(&self) -> &[TermEntry] {
        &self.entries
    }
}

impl FromIterator<TermEntry> for TermTable {
    fn from_iter<I: IntoIterator<Item = TermEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl Extend<TermEntry> for TermTable {
    fn extend<I: IntoIterator<Item = TermEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl IntoIterator for TermTable {
    type Item = TermEntry;
    type IntoIter = vec::IntoIter<TermEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for TermTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.source, &entry.target)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TermTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TermTableVisitor)
    }
}

struct TermTableVisitor;

impl<'de> Visitor<'de> for TermTableVisitor {
    type Value = TermTable;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object of source/target phrases or an array of term entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = TermTable::new();
        while let Some((source, target)) = access.next_entry::<String, String>()? {
            if source.trim().is_empty() {
                return Err(de::Error::custom("term entry source must not be blank"));
            }
            table.insert(TermEntry::new(&source, target));
        }
        Ok(table)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = TermTable::new();
        while let Some(raw) = access.next_element::<TermEntry>()? {
            if raw.source.trim().is_empty() {
                return Err(de::Error::custom("term entry source must not be blank"));
            }
            table.insert(raw);
        }
        Ok(table)
    }
}
