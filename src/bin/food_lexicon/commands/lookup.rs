// ABOUTME: Lookup commands for food-lexicon
// ABOUTME: Handles translate, lookup, check, and search-query output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use food_lexicon::{config::LexiconConfig, errors::AppResult, search::SearchQuery};

/// Print the translation of `phrase`
pub fn translate(config: &LexiconConfig, phrase: &str) -> AppResult<()> {
    let mapper = config.build_mapper()?;
    println!("{}", mapper.translate(phrase));
    Ok(())
}

/// Print how `phrase` is resolved
pub fn lookup(config: &LexiconConfig, phrase: &str, json: bool) -> AppResult<()> {
    let mapper = config.build_mapper()?;
    let outcome = mapper.lookup(phrase);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("Original:   {}", outcome.original);
        println!("Translated: {}", outcome.translated);
        println!("Match:      {}", outcome.kind.label());
        if let Some(key) = outcome.kind.key() {
            println!("Key:        {key}");
        }
    }
    Ok(())
}

/// Print whether `phrase` has an exact entry
pub fn check(config: &LexiconConfig, phrase: &str) -> AppResult<()> {
    let mapper = config.build_mapper()?;
    match mapper.get_exact(phrase) {
        Some(target) => println!("yes: {target}"),
        None => println!("no"),
    }
    Ok(())
}

/// Print the encoded search query for `phrase`
pub fn search_query(config: &LexiconConfig, phrase: &str, json: bool) -> AppResult<()> {
    let mapper = config.build_mapper()?;
    let query = SearchQuery::prepare(&mapper, phrase);

    if json {
        println!("{}", serde_json::to_string_pretty(&query)?);
    } else {
        println!("{}", query.encoded());
    }
    Ok(())
}
