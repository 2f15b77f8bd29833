// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment variable names and defaults for the food lexicon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Environment variable names read by the configuration layer
pub mod env_vars {
    /// Seed the mapper with the built-in food table (`true`/`false`)
    pub const INCLUDE_BUILTIN: &str = "LEXICON_INCLUDE_BUILTIN";
    /// Path of a JSON file with additional entries
    pub const CUSTOM_ENTRIES_PATH: &str = "LEXICON_CUSTOM_ENTRIES_PATH";
    /// Log level filter
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Service name override for structured logs
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
}

/// Configuration defaults
pub mod defaults {
    /// Built-in table is loaded unless disabled
    pub const INCLUDE_BUILTIN: bool = true;
    /// Default log level; the CLI stays quiet on stderr unless asked
    pub const LOG_LEVEL: &str = "warn";
    /// Default deployment environment
    pub const ENVIRONMENT: &str = "development";
}

/// Service names used in structured logging
pub mod service_names {
    /// Name reported by the lexicon binaries
    pub const FOOD_LEXICON: &str = "food-lexicon";
}
