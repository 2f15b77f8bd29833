// ABOUTME: Core types and constants for the food lexicon
// ABOUTME: Foundation crate with error handling, the term entry model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Lexicon Core
//!
//! Foundation crate providing shared types and constants for the food lexicon.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Environment variable names and configuration defaults
//! - **models**: The `TermEntry` pair and the ordered `TermTable` snapshot

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (`TermEntry`, `TermTable`)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{normalize_phrase, TermEntry, TermTable};
