// ABOUTME: Re-exports command modules for food-lexicon
// ABOUTME: Provides lookup commands and dictionary file management commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod dictionary;
pub mod lookup;
