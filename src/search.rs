// ABOUTME: Prepares raw food search input for the external nutrition search endpoint
// ABOUTME: Tracks original vs translated query and picks the display name for results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Search Query Preparation
//!
//! A user types a food name in Portuguese; the nutrition database is searched
//! in English. [`SearchQuery`] records both forms so results can be labelled
//! with the name the user typed.

use crate::term_mapper::{MatchKind, TermMapper};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A food search query before it is sent to the nutrition data provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Query as typed by the user
    pub original_query: String,
    /// Query after translation; equal to `original_query` when nothing matched
    pub translated_query: String,
    /// Lookup step that produced `translated_query`
    pub match_kind: MatchKind,
}

impl SearchQuery {
    /// Translate a raw query with the given mapper
    #[must_use]
    pub fn prepare(mapper: &TermMapper, raw_query: &str) -> Self {
        let outcome = mapper.lookup(raw_query);
        Self {
            original_query: outcome.original,
            translated_query: outcome.translated,
            match_kind: outcome.kind,
        }
    }

    /// Whether translation changed the query text
    #[must_use]
    pub fn was_translated(&self) -> bool {
        self.original_query != self.translated_query
    }

    /// Translated query, percent-encoded for use as a URL query parameter
    #[must_use]
    pub fn encoded(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.translated_query)
    }

    /// Name to show for a search result.
    ///
    /// When the query was translated the user's own wording is kept, otherwise
    /// the provider's product name is used.
    #[must_use]
    pub fn display_name<'a>(&'a self, product_name: &'a str) -> &'a str {
        if self.was_translated() {
            &self.original_query
        } else {
            product_name
        }
    }
}
