// ABOUTME: Integration tests for the term mapper lookup and mutation contract
// ABOUTME: Covers exact, substring, and identity lookups against the built-in table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Term mapper integration tests
//!
//! - Built-in food table scenarios (exact, substring fallback, identity)
//! - Case and whitespace insensitivity
//! - `add_entry` insertion, overwrite, and idempotence
//! - `export_all` ordering and isolation from the live dictionary

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use food_lexicon::{MatchKind, TermEntry, TermMapper};

mod common;

// ============================================================================
// BUILT-IN TABLE SCENARIOS
// ============================================================================

#[test]
fn test_exact_match_white_rice() {
    let mapper = common::builtin_mapper();
    assert_eq!(mapper.translate("arroz branco"), "white rice");
}

#[test]
fn test_input_containing_key_falls_back_to_key() {
    let mapper = common::builtin_mapper();
    assert_eq!(mapper.translate("arroz branco cozido"), "white rice");
    assert_eq!(mapper.translate("frango grelhado"), "chicken");
}

#[test]
fn test_unknown_phrase_is_returned_unchanged() {
    let mapper = common::builtin_mapper();
    assert_eq!(mapper.translate("xyz-unknown-food"), "xyz-unknown-food");
    // Original casing and whitespace survive the identity fallback.
    assert_eq!(mapper.translate("  Kombucha "), "  Kombucha ");
}

#[test]
fn test_empty_and_blank_input() {
    let mapper = common::builtin_mapper();
    assert_eq!(mapper.translate(""), "");
    assert_eq!(mapper.translate("   "), "   ");
    assert_eq!(mapper.lookup("").kind, MatchKind::Identity);
}

#[test]
fn test_case_and_whitespace_insensitive() {
    let mapper = common::builtin_mapper();
    assert_eq!(
        mapper.translate("  ARROZ Branco "),
        mapper.translate("arroz branco")
    );
    assert_eq!(mapper.translate("PÃO INTEGRAL"), "whole wheat bread");
}

#[test]
fn test_fallback_prefers_earlier_entries() {
    let mapper = common::builtin_mapper();
    // "laranja" (fruits) is scanned before "suco de laranja" (beverages).
    let outcome = mapper.lookup("suco de laranja natural");
    assert_eq!(outcome.translated, "orange");
    assert_eq!(outcome.kind, MatchKind::Partial { key: "laranja".into() });
}

#[test]
fn test_fallback_is_deterministic() {
    let mapper = common::builtin_mapper();
    let first = mapper.translate("café com leite");
    for _ in 0..10 {
        assert_eq!(mapper.translate("café com leite"), first);
    }
    assert_eq!(TermMapper::with_builtin().translate("café com leite"), first);
}

#[test]
fn test_builtin_duplicates_collapse() {
    let mapper = common::builtin_mapper();
    assert_eq!(mapper.len(), 239);
    assert_eq!(mapper.translate("pudim"), "pudding");
    assert_eq!(mapper.translate("inhame"), "yam");
}

#[test]
fn test_has_exact_entry_ignores_fallback() {
    let mapper = common::builtin_mapper();
    assert!(mapper.has_exact_entry(" Batata Doce "));
    assert!(!mapper.has_exact_entry("batata doce assada"));
    assert!(!mapper.has_exact_entry(""));
}

// ============================================================================
// MUTATION
// ============================================================================

#[test]
fn test_added_entry_is_case_insensitive() {
    let mut mapper = common::builtin_mapper();
    mapper.add_entry("tofu", "tofu");
    assert_eq!(mapper.translate("Tofu"), "tofu");
    assert!(mapper.has_exact_entry("TOFU"));
}

#[test]
fn test_added_entries_round_trip_every_variation() {
    let mut mapper = TermMapper::new();
    let pairs = [
        ("Pão de Queijo", "cheese bread"),
        ("  coxinha ", "Chicken Croquette"),
        ("BRIGADEIRO", "chocolate truffle"),
    ];
    for (source, target) in pairs {
        mapper.add_entry(source, target);
    }

    for (source, target) in pairs {
        assert_eq!(mapper.translate(source), target);
        assert_eq!(mapper.translate(&source.to_uppercase()), target);
        assert_eq!(mapper.translate(&format!("\t{}\n", source.trim())), target);
    }
}

#[test]
fn test_overwrite_replaces_value() {
    let mut mapper = common::builtin_mapper();
    mapper.add_entry("arroz branco", "steamed white rice");
    mapper.add_entry("ARROZ BRANCO", "white rice, cooked");
    assert_eq!(mapper.translate("arroz branco"), "white rice, cooked");
    assert_eq!(mapper.len(), 239);
}

#[test]
fn test_add_entry_is_idempotent() {
    let mut mapper = common::builtin_mapper();
    mapper.add_entry("açaí na tigela", "acai bowl");
    let after_first = mapper.export_all();
    mapper.add_entry("açaí na tigela", "acai bowl");
    assert_eq!(mapper.export_all(), after_first);
}

#[test]
fn test_target_is_stored_verbatim() {
    let mut mapper = TermMapper::new();
    mapper.add_entry("Farofa", "  Toasted Cassava Flour ");
    assert_eq!(mapper.translate("farofa"), "  Toasted Cassava Flour ");
}

// ============================================================================
// EXPORT
// ============================================================================

#[test]
fn test_export_preserves_insertion_order() {
    let mapper: TermMapper = [
        TermEntry::new("ovo", "egg"),
        TermEntry::new("aveia", "oats"),
        TermEntry::new("mel", "honey"),
    ]
    .into_iter()
    .collect();

    let keys: Vec<String> = mapper
        .export_all()
        .into_iter()
        .map(|entry| entry.source)
        .collect();
    assert_eq!(keys, vec!["ovo", "aveia", "mel"]);
}

#[test]
fn test_export_is_a_defensive_copy() {
    let mapper = common::builtin_mapper();
    let mut exported = mapper.export_all();
    exported.insert(TermEntry::new("arroz branco", "changed"));
    exported.insert(TermEntry::new("tofu", "tofu"));

    assert_eq!(mapper.translate("arroz branco"), "white rice");
    assert!(!mapper.has_exact_entry("tofu"));
}
