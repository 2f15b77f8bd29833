// ABOUTME: Reads custom term entries from JSON files and exports the dictionary as JSON
// ABOUTME: Writes go through a temp file and rename so a crash never leaves a partial file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Custom Entry Files
//!
//! Accepted JSON layouts:
//!
//! ```json
//! { "tofu": "tofu", "pão de queijo": "cheese bread" }
//! ```
//!
//! ```json
//! [{ "source": "tofu", "target": "tofu" }]
//! ```
//!
//! The object layout is what [`export_json`] produces, so an exported
//! dictionary can be loaded back as custom entries.

use crate::term_mapper::TermMapper;
use lexicon_core::{AppError, AppResult, TermTable};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load entries from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not one of the accepted
/// JSON layouts
pub fn load_entries(path: &Path) -> AppResult<TermTable> {
    debug!("Loading custom term entries from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read {}: {e}", path.display())).with_source(e)
    })?;
    let table: TermTable = serde_json::from_str(&content).map_err(|e| {
        AppError::invalid_format(format!("Invalid term entries in {}: {e}", path.display()))
            .with_source(e)
    })?;

    info!(
        entries = table.len(),
        path = %path.display(),
        "Loaded custom term entries"
    );
    Ok(table)
}

/// Load entries from a JSON file and merge them into `mapper`
///
/// # Errors
///
/// Returns an error if the file cannot be loaded; `mapper` is left untouched
pub fn merge_file(mapper: &mut TermMapper, path: &Path) -> AppResult<usize> {
    let table = load_entries(path)?;
    let count = table.len();
    mapper.extend(table);
    Ok(count)
}

/// Render the mapper's dictionary as a pretty-printed JSON object in insertion order
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn export_json(mapper: &TermMapper) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&mapper.export_all())?)
}

/// Write entries to `path` as a JSON object
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written
pub fn save_entries(path: &Path, table: &TermTable) -> AppResult<()> {
    let json = serde_json::to_string_pretty(table)?;
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, json).map_err(|e| {
        AppError::storage(format!("Failed to write {}: {e}", temp_path.display())).with_source(e)
    })?;
    fs::rename(&temp_path, path).map_err(|e| {
        AppError::storage(format!("Failed to replace {}: {e}", path.display())).with_source(e)
    })?;

    info!(entries = table.len(), path = %path.display(), "Saved term entries");
    Ok(())
}
