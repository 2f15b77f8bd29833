// ABOUTME: food-lexicon CLI - command-line access to the Portuguese to English food term mapper
// ABOUTME: Translates phrases, inspects matches, and manages custom entry files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Translate a food name
//! food-lexicon translate "arroz branco cozido"
//!
//! # Show which entry produced the translation
//! food-lexicon lookup "frango grelhado" --json
//!
//! # Check for an exact dictionary entry
//! food-lexicon check "batata doce"
//!
//! # Print the URL-encoded search query
//! food-lexicon search-query "peito de frango"
//!
//! # Save a custom translation and use it
//! food-lexicon add "pão de queijo" "cheese bread" --file custom.json
//! food-lexicon --custom-entries custom.json translate "Pão de Queijo"
//!
//! # Export the full dictionary as JSON
//! food-lexicon export --output dictionary.json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use food_lexicon::{config::LexiconConfig, errors::AppResult, logging};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "food-lexicon",
    about = "Portuguese to English food term lookup",
    long_about = "Translate Portuguese food names for English nutrition database searches and manage custom translations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file with custom entries (overrides LEXICON_CUSTOM_ENTRIES_PATH)
    #[arg(long, global = true)]
    custom_entries: Option<PathBuf>,

    /// Start from an empty dictionary instead of the built-in table
    #[arg(long, global = true)]
    no_builtin: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Translate a phrase
    Translate {
        /// Phrase to translate
        phrase: String,
    },

    /// Show how a phrase is resolved
    Lookup {
        /// Phrase to look up
        phrase: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report whether a phrase has an exact entry
    Check {
        /// Phrase to check
        phrase: String,
    },

    /// Print the translated, URL-encoded search query for a phrase
    SearchQuery {
        /// Raw search input
        phrase: String,

        /// Print the full query record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add or overwrite an entry in a custom entries file
    Add {
        /// Portuguese phrase
        source: String,

        /// English phrase
        target: String,

        /// Custom entries file to update (created if missing)
        #[arg(long)]
        file: PathBuf,
    },

    /// Export the dictionary as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging is optional for a CLI; keep going if a subscriber already exists.
    if let Err(e) = logging::init_from_env(cli.verbose) {
        eprintln!("{e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let mut config = LexiconConfig::from_env().with_builtin(!cli.no_builtin);
    if let Some(path) = cli.custom_entries {
        config = config.with_custom_entries_path(path);
    }
    debug!(?config, "Resolved lexicon configuration");

    match cli.command {
        Command::Translate { phrase } => commands::lookup::translate(&config, &phrase),
        Command::Lookup { phrase, json } => commands::lookup::lookup(&config, &phrase, json),
        Command::Check { phrase } => commands::lookup::check(&config, &phrase),
        Command::SearchQuery { phrase, json } => {
            commands::lookup::search_query(&config, &phrase, json)
        }
        Command::Add {
            source,
            target,
            file,
        } => commands::dictionary::add(&source, &target, &file),
        Command::Export { output } => commands::dictionary::export(&config, output.as_deref()),
    }
}
