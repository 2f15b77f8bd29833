// ABOUTME: Dictionary file commands for food-lexicon
// ABOUTME: Adds custom entries to JSON files and exports the full dictionary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use food_lexicon::{
    config::LexiconConfig,
    errors::{AppError, AppResult},
    persistence, TermEntry, TermTable,
};
use std::path::Path;
use tracing::info;

/// Add or overwrite an entry in a custom entries file
pub fn add(source: &str, target: &str, file: &Path) -> AppResult<()> {
    if source.trim().is_empty() {
        return Err(AppError::invalid_input("Source phrase must not be blank"));
    }

    let mut table = if file.exists() {
        persistence::load_entries(file)?
    } else {
        TermTable::new()
    };
    let entry = TermEntry::new(source, target);
    let key = entry.source.clone();
    let replaced = table.get(&key).is_some();
    table.insert(entry);
    persistence::save_entries(file, &table)?;

    info!(source = %key, target, replaced, "Updated custom entries file");
    println!(
        "{} \"{key}\" -> \"{target}\" in {}",
        if replaced { "Updated" } else { "Added" },
        file.display()
    );
    Ok(())
}

/// Export the dictionary as JSON to stdout or a file
pub fn export(config: &LexiconConfig, output: Option<&Path>) -> AppResult<()> {
    let mapper = config.build_mapper()?;
    match output {
        Some(path) => {
            persistence::save_entries(path, &mapper.export_all())?;
            println!("Exported {} entries to {}", mapper.len(), path.display());
        }
        None => println!("{}", persistence::export_json(&mapper)?),
    }
    Ok(())
}
