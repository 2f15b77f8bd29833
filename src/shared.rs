// ABOUTME: Thread-safe handle around a term mapper for use from concurrent services
// ABOUTME: Readers run in parallel; adding an entry takes the write lock for one atomic insert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Shared Term Mapper
//!
//! A cloneable handle to one dictionary. Lookups take the read lock and never
//! block each other; [`SharedTermMapper::add_entry`] takes the write lock, so
//! a reader sees either the old dictionary or the new entry with its key and
//! value together.
//!
//! Every write is a single insert that cannot leave the table half-updated,
//! so a poisoned lock is recovered rather than reported.

use crate::term_mapper::{TermMapper, TranslationOutcome};
use lexicon_core::{TermEntry, TermTable};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

/// Cloneable, thread-safe term mapper handle
#[derive(Debug, Clone, Default)]
pub struct SharedTermMapper {
    inner: Arc<RwLock<TermMapper>>,
}

impl SharedTermMapper {
    /// Wrap an existing mapper
    #[must_use]
    pub fn new(mapper: TermMapper) -> Self {
        Self {
            inner: Arc::new(RwLock::new(mapper)),
        }
    }

    /// Shared handle seeded with the built-in food table
    #[must_use]
    pub fn with_builtin() -> Self {
        Self::new(TermMapper::with_builtin())
    }

    /// See [`TermMapper::translate`]
    #[must_use]
    pub fn translate(&self, phrase: &str) -> String {
        self.read().translate(phrase)
    }

    /// See [`TermMapper::lookup`]
    #[must_use]
    pub fn lookup(&self, phrase: &str) -> TranslationOutcome {
        self.read().lookup(phrase)
    }

    /// See [`TermMapper::has_exact_entry`]
    #[must_use]
    pub fn has_exact_entry(&self, phrase: &str) -> bool {
        self.read().has_exact_entry(phrase)
    }

    /// See [`TermMapper::add_entry`]
    pub fn add_entry(&self, source: &str, target: impl Into<String>) {
        self.write().add_entry(source, target);
    }

    /// Apply a batch of entries under a single write lock
    pub fn extend(&self, entries: impl IntoIterator<Item = TermEntry>) {
        let mut mapper = self.write();
        let before = mapper.len();
        mapper.extend(entries);
        info!(
            added = mapper.len() - before,
            total = mapper.len(),
            "Merged term entries into shared mapper"
        );
    }

    /// See [`TermMapper::export_all`]
    #[must_use]
    pub fn export_all(&self) -> TermTable {
        self.read().export_all()
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the dictionary holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Independent copy of the current dictionary
    #[must_use]
    pub fn snapshot(&self) -> TermMapper {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, TermMapper> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TermMapper> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<TermMapper> for SharedTermMapper {
    fn from(mapper: TermMapper) -> Self {
        Self::new(mapper)
    }
}
