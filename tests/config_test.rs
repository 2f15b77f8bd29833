// ABOUTME: Tests for environment-based lexicon configuration
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use food_lexicon::config::LexiconConfig;
use food_lexicon::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

mod common;

const INCLUDE_BUILTIN: &str = "LEXICON_INCLUDE_BUILTIN";
const CUSTOM_ENTRIES_PATH: &str = "LEXICON_CUSTOM_ENTRIES_PATH";

fn clear_env() {
    env::remove_var(INCLUDE_BUILTIN);
    env::remove_var(CUSTOM_ENTRIES_PATH);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = LexiconConfig::from_env();
    assert_eq!(config, LexiconConfig::default());
    assert!(config.include_builtin);
    assert!(config.custom_entries_path.is_none());
}

#[test]
#[serial]
fn test_environment_overrides() {
    common::init_test_logging();
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.json");
    fs::write(&path, r#"{ "tofu": "tofu" }"#).unwrap();

    env::set_var(INCLUDE_BUILTIN, "false");
    env::set_var(CUSTOM_ENTRIES_PATH, &path);
    let config = LexiconConfig::from_env();
    clear_env();

    assert!(!config.include_builtin);
    let mapper = config.build_mapper().unwrap();
    assert_eq!(mapper.len(), 1);
    assert_eq!(mapper.translate("arroz"), "arroz");
    assert_eq!(mapper.translate("TOFU"), "tofu");
}

#[test]
#[serial]
fn test_invalid_boolean_falls_back_to_default() {
    clear_env();
    env::set_var(INCLUDE_BUILTIN, "sometimes");
    env::set_var(CUSTOM_ENTRIES_PATH, "   ");
    let config = LexiconConfig::from_env();
    clear_env();

    assert!(config.include_builtin);
    assert!(config.custom_entries_path.is_none());
}

#[test]
#[serial]
fn test_missing_custom_file_fails_build() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config = LexiconConfig::from_env().with_custom_entries_path(dir.path().join("nope.json"));

    let error = config.build_mapper().unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}
