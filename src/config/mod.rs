// ABOUTME: Configuration management module for the food lexicon
// ABOUTME: Environment-only settings controlling how the term mapper is built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is read from environment variables only; there is no config
//! file. See [`environment::LexiconConfig`].

/// Environment-based lexicon configuration
pub mod environment;

pub use environment::LexiconConfig;
