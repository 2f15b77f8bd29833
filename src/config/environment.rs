// ABOUTME: Environment-based configuration for building the term mapper
// ABOUTME: Controls built-in seeding and the optional custom entries file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::persistence;
use crate::term_mapper::TermMapper;
use lexicon_core::constants::{defaults, env_vars};
use lexicon_core::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

/// Settings used to build a [`TermMapper`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconConfig {
    /// Seed the mapper with the built-in food table
    pub include_builtin: bool,
    /// JSON file with entries applied after the built-in table
    pub custom_entries_path: Option<PathBuf>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            include_builtin: defaults::INCLUDE_BUILTIN,
            custom_entries_path: None,
        }
    }
}

impl LexiconConfig {
    /// Load configuration from environment variables.
    ///
    /// Unparseable values fall back to their defaults with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let include_builtin = env::var(env_vars::INCLUDE_BUILTIN).map_or(
            defaults::INCLUDE_BUILTIN,
            |raw| {
                parse_bool(&raw).unwrap_or_else(|| {
                    warn!(
                        "Invalid {}={raw:?}, using default {}",
                        env_vars::INCLUDE_BUILTIN,
                        defaults::INCLUDE_BUILTIN
                    );
                    defaults::INCLUDE_BUILTIN
                })
            },
        );

        let custom_entries_path = env::var(env_vars::CUSTOM_ENTRIES_PATH)
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Self {
            include_builtin,
            custom_entries_path,
        }
    }

    /// Override the custom entries file
    #[must_use]
    pub fn with_custom_entries_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.custom_entries_path = Some(path.into());
        self
    }

    /// Enable or disable the built-in table
    #[must_use]
    pub const fn with_builtin(mut self, include_builtin: bool) -> Self {
        self.include_builtin = include_builtin;
        self
    }

    /// Build a mapper from this configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the custom entries path names a
    /// directory, or a storage/format error if the file cannot be read or parsed
    pub fn build_mapper(&self) -> AppResult<TermMapper> {
        if let Some(path) = self.custom_entries_path.as_deref().filter(|p| p.is_dir()) {
            return Err(AppError::config(format!(
                "Custom entries path {} is a directory, expected a JSON file",
                path.display()
            )));
        }

        let mut mapper = if self.include_builtin {
            TermMapper::with_builtin()
        } else {
            TermMapper::new()
        };

        if let Some(path) = &self.custom_entries_path {
            let merged = persistence::merge_file(&mut mapper, path)?;
            info!(merged, total = mapper.len(), "Applied custom term entries");
        }

        Ok(mapper)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
