// ABOUTME: Integration tests for custom entry files and JSON export
// ABOUTME: Uses temporary directories for load, save, and merge round trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use food_lexicon::errors::ErrorCode;
use food_lexicon::{persistence, TermEntry, TermMapper, TermTable};
use std::fs;
use tempfile::TempDir;

mod common;

#[test]
fn test_load_object_layout() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.json");
    fs::write(&path, r#"{ "Pão de Queijo": "cheese bread", "tofu": "tofu" }"#).unwrap();

    let table = persistence::load_entries(&path).unwrap();
    let keys: Vec<&str> = table.iter().map(|e| e.source.as_str()).collect();
    assert_eq!(keys, vec!["pão de queijo", "tofu"]);
}

#[test]
fn test_load_array_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.json");
    fs::write(
        &path,
        r#"[{ "source": "Coxinha", "target": "chicken croquette" }]"#,
    )
    .unwrap();

    let table = persistence::load_entries(&path).unwrap();
    assert_eq!(table.get("coxinha"), Some("chicken croquette"));
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let error = persistence::load_entries(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[test]
fn test_malformed_file_is_format_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{ "tofu": 42 }"#).unwrap();

    let error = persistence::load_entries(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert!(error.message.contains("broken.json"));
}

#[test]
fn test_merge_file_overrides_builtin() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.json");
    fs::write(&path, r#"{ "frango": "poultry", "tofu": "tofu" }"#).unwrap();

    let mut mapper = common::builtin_mapper();
    let before = mapper.len();
    let merged = persistence::merge_file(&mut mapper, &path).unwrap();

    assert_eq!(merged, 2);
    assert_eq!(mapper.len(), before + 1);
    assert_eq!(mapper.translate("frango grelhado"), "poultry");
    assert_eq!(mapper.translate("Tofu"), "tofu");
}

#[test]
fn test_export_then_reload_reproduces_dictionary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.json");
    let mapper = common::builtin_mapper();

    persistence::save_entries(&path, &mapper.export_all()).unwrap();
    let reloaded: TermMapper = persistence::load_entries(&path).unwrap().into_iter().collect();

    assert_eq!(reloaded.export_all(), mapper.export_all());
    assert_eq!(reloaded.translate("arroz branco cozido"), "white rice");
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn test_export_json_keeps_order() {
    let mapper: TermMapper = [TermEntry::new("ovo", "egg"), TermEntry::new("aveia", "oats")]
        .into_iter()
        .collect();
    let json = persistence::export_json(&mapper).unwrap();

    let parsed: TermTable = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, mapper.export_all());
    assert!(json.find("ovo").unwrap() < json.find("aveia").unwrap());
}
