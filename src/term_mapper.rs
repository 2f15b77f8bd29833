// ABOUTME: Portuguese to English food term mapper with exact and substring fallback lookup
// ABOUTME: Translates search queries before they reach the nutrition data search endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Term Mapper
//!
//! Maps a free-text food phrase to its best-known English equivalent.
//!
//! Lookup runs in three steps over the normalized phrase (trimmed,
//! lower-cased):
//! 1. **Exact match** against a stored key.
//! 2. **Fallback substring match**: the first entry, in insertion order, whose
//!    key is contained in the phrase or which contains the phrase.
//! 3. **Identity fallback**: the original input, untouched.
//!
//! Translation never fails. Callers forwarding the result to a search API must
//! always be prepared to receive their own input back.
//!
//! # Example
//! ```rust
//! use food_lexicon::term_mapper::TermMapper;
//!
//! let mut mapper = TermMapper::with_builtin();
//! assert_eq!(mapper.translate("Arroz Branco"), "white rice");
//! assert_eq!(mapper.translate("frango grelhado"), "chicken");
//!
//! mapper.add_entry("tofu", "tofu");
//! assert_eq!(mapper.translate("Tofu"), "tofu");
//! ```

use crate::seed;
use lexicon_core::{normalize_phrase, TermEntry, TermTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

/// How a phrase was resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchKind {
    /// The normalized phrase equals a stored key
    Exact {
        /// Matched key
        key: String,
    },
    /// A stored key and the normalized phrase contain one another
    Partial {
        /// First matching key in insertion order
        key: String,
    },
    /// Nothing matched; the input is returned unchanged
    Identity,
}

impl MatchKind {
    /// Key that produced the translation, if any
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Exact { key } | Self::Partial { key } => Some(key.as_str()),
            Self::Identity => None,
        }
    }

    /// Short label for logs and CLI output
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Exact { .. } => "exact",
            Self::Partial { .. } => "partial",
            Self::Identity => "identity",
        }
    }
}

/// Detailed result of a lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationOutcome {
    /// Phrase as supplied by the caller
    pub original: String,
    /// Translated phrase, or `original` on identity fallback
    pub translated: String,
    /// Which lookup step produced `translated`
    #[serde(flatten)]
    pub kind: MatchKind,
}

impl TranslationOutcome {
    /// Whether a dictionary entry was used
    #[must_use]
    pub const fn is_match(&self) -> bool {
        !matches!(self.kind, MatchKind::Identity)
    }
}

/// Insertion-ordered food term dictionary.
///
/// Reads take `&self` and writes take `&mut self`; wrap the mapper in
/// [`SharedTermMapper`](crate::shared::SharedTermMapper) to share one
/// dictionary between threads.
#[derive(Debug, Clone, Default)]
pub struct TermMapper {
    entries: Vec<TermEntry>,
    /// Normalized key -> position in `entries`
    index: HashMap<String, usize>,
}

impl TermMapper {
    /// Create an empty mapper
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper seeded with the built-in food table
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut mapper = Self::new();
        for row in seed::builtin_entries() {
            mapper.add_entry(row.source, row.target);
        }
        debug!(entries = mapper.len(), "Seeded term mapper from built-in table");
        mapper
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translate a phrase, falling back to the input itself when nothing matches
    #[must_use]
    pub fn translate(&self, phrase: &str) -> String {
        self.resolve(phrase)
            .map_or_else(|| phrase.to_owned(), |(_, entry)| entry.target.clone())
    }

    /// Translate a phrase and report which lookup step produced the result
    #[must_use]
    pub fn lookup(&self, phrase: &str) -> TranslationOutcome {
        match self.resolve(phrase) {
            Some((kind, entry)) => TranslationOutcome {
                original: phrase.to_owned(),
                translated: entry.target.clone(),
                kind,
            },
            None => TranslationOutcome {
                original: phrase.to_owned(),
                translated: phrase.to_owned(),
                kind: MatchKind::Identity,
            },
        }
    }

    /// Whether the normalized phrase is a stored key. Substring matches do not count.
    #[must_use]
    pub fn has_exact_entry(&self, phrase: &str) -> bool {
        self.index.contains_key(&normalize_phrase(phrase))
    }

    /// Target stored under the normalized phrase, without substring fallback
    #[must_use]
    pub fn get_exact(&self, phrase: &str) -> Option<&str> {
        self.index
            .get(&normalize_phrase(phrase))
            .map(|&position| self.entries[position].target.as_str())
    }

    /// Insert or overwrite the entry for `source`.
    ///
    /// The key is normalized, the target is stored verbatim. Overwriting keeps
    /// the key's original position in the fallback scan order. A source that
    /// is blank after trimming is ignored.
    pub fn add_entry(&mut self, source: &str, target: impl Into<String>) {
        self.insert(TermEntry::new(source, target));
    }

    /// Insert an already-built entry with the same rules as [`Self::add_entry`]
    pub fn insert(&mut self, entry: TermEntry) {
        let entry = TermEntry::new(&entry.source, entry.target);
        if entry.source.is_empty() {
            debug!("Ignoring term entry with blank source phrase");
            return;
        }

        if let Some(&position) = self.index.get(&entry.source) {
            trace!(source = %entry.source, target = %entry.target, "Overwriting term entry");
            self.entries[position].target = entry.target;
        } else {
            trace!(source = %entry.source, target = %entry.target, "Adding term entry");
            self.index.insert(entry.source.clone(), self.entries.len());
            self.entries.push(entry);
        }
    }

    /// Copy of the current dictionary in insertion order
    #[must_use]
    pub fn export_all(&self) -> TermTable {
        self.entries.iter().cloned().collect()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TermEntry> {
        self.entries.iter()
    }

    fn resolve(&self, phrase: &str) -> Option<(MatchKind, &TermEntry)> {
        let normalized = normalize_phrase(phrase);
        // An empty phrase is a substring of every key; treat it as unmatched.
        if normalized.is_empty() {
            return None;
        }

        if let Some(&position) = self.index.get(&normalized) {
            let entry = &self.entries[position];
            debug!(phrase = %normalized, target = %entry.target, "Exact term match");
            return Some((
                MatchKind::Exact {
                    key: entry.source.clone(),
                },
                entry,
            ));
        }

        let found = self.entries.iter().find(|entry| {
            normalized.contains(entry.source.as_str()) || entry.source.contains(normalized.as_str())
        });

        if let Some(entry) = found {
            debug!(
                phrase = %normalized,
                key = %entry.source,
                target = %entry.target,
                "Partial term match"
            );
            Some((
                MatchKind::Partial {
                    key: entry.source.clone(),
                },
                entry,
            ))
        } else {
            debug!(phrase = %normalized, "No term match, returning input unchanged");
            None
        }
    }
}

impl FromIterator<TermEntry> for TermMapper {
    fn from_iter<I: IntoIterator<Item = TermEntry>>(iter: I) -> Self {
        let mut mapper = Self::new();
        mapper.extend(iter);
        mapper
    }
}

impl Extend<TermEntry> for TermMapper {
    fn extend<I: IntoIterator<Item = TermEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_mapper() -> TermMapper {
        [
            TermEntry::new("batata doce", "sweet potato"),
            TermEntry::new("batata", "potato"),
            TermEntry::new("doce", "candy"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_key_containing_input_matches() {
        let mapper = small_mapper();
        // "batata doce" is scanned before "doce" and contains the input.
        assert_eq!(mapper.translate("doce de leite"), "candy");
        assert_eq!(mapper.translate("ata"), "sweet potato");
    }

    #[test]
    fn test_lookup_reports_match_kind() {
        let mapper = small_mapper();

        let exact = mapper.lookup("  BATATA ");
        assert_eq!(exact.kind, MatchKind::Exact { key: "batata".into() });
        assert_eq!(exact.original, "  BATATA ");

        let partial = mapper.lookup("batata frita");
        assert_eq!(partial.kind.label(), "partial");
        assert_eq!(partial.kind.key(), Some("batata"));

        let identity = mapper.lookup("Quinoa");
        assert!(!identity.is_match());
        assert_eq!(identity.translated, "Quinoa");
    }

    #[test]
    fn test_blank_source_is_ignored() {
        let mut mapper = small_mapper();
        mapper.add_entry("   ", "nothing");
        assert_eq!(mapper.len(), 3);
        assert_eq!(mapper.translate(""), "");
    }

    #[test]
    fn test_overwrite_keeps_scan_position() {
        let mut mapper = small_mapper();
        mapper.add_entry("Batata Doce", "yam");

        let keys: Vec<&str> = mapper.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(keys, vec!["batata doce", "batata", "doce"]);
        assert_eq!(mapper.translate("doce"), "candy");
        assert_eq!(mapper.translate("batata doce assada"), "yam");
    }

    #[test]
    fn test_get_exact_ignores_substring_matches() {
        let mapper = small_mapper();
        assert_eq!(mapper.get_exact("BATATA"), Some("potato"));
        assert_eq!(mapper.get_exact("batata frita"), None);
        assert!(!mapper.has_exact_entry("batata frita"));
    }
}
