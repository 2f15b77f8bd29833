// ABOUTME: Error types for the food lexicon, re-exported from the core crate
// ABOUTME: Keeps `food_lexicon::errors::AppResult` available to binaries and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use lexicon_core::errors::{AppError, AppResult, ErrorCode};
