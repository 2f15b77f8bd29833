// ABOUTME: Main library entry point for the food lexicon
// ABOUTME: Portuguese to English food term translation for nutrition data search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Food Lexicon
//!
//! Translates Portuguese food names into English before they are sent to an
//! English-language nutrition database search.
//!
//! ## Architecture
//!
//! - **Term mapper**: insertion-ordered dictionary with exact, substring, and
//!   identity lookup steps
//! - **Shared mapper**: `RwLock` handle for concurrent services
//! - **Seed**: the built-in food table, grouped by category
//! - **Search**: query preparation for the nutrition search pipeline
//! - **Persistence**: custom entry files and JSON export
//! - **Config / Logging**: environment configuration and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust
//! use food_lexicon::search::SearchQuery;
//! use food_lexicon::term_mapper::TermMapper;
//!
//! let mapper = TermMapper::with_builtin();
//! let query = SearchQuery::prepare(&mapper, "arroz branco cozido");
//!
//! assert_eq!(query.translated_query, "white rice");
//! assert_eq!(query.encoded(), "white%20rice");
//! ```

/// Environment-based configuration
pub mod config;

/// Error types re-exported from `lexicon-core`
pub mod errors;

/// Structured logging setup for binaries
pub mod logging;

/// Custom entry files and JSON export
pub mod persistence;

/// Search query preparation for the nutrition search pipeline
pub mod search;

/// Built-in food table
pub mod seed;

/// Thread-safe term mapper handle
pub mod shared;

/// Portuguese to English food term mapper
pub mod term_mapper;

pub use lexicon_core::{TermEntry, TermTable};
pub use shared::SharedTermMapper;
pub use term_mapper::{MatchKind, TermMapper, TranslationOutcome};
