//! Common utilities for the declscan workspace.
//!
//! This crate provides shared infrastructure used by the tokenizer and the CLI:
//! - **Warning System** - deduplicated, colored terminal output for diagnostics

pub mod warning;
