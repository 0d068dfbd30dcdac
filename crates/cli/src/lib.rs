// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! findit: locate where a keyword is declared, assigned, and used.
//!
//! Pipeline: [`walker`] → [`scanner`] → [`pattern`] → [`render`] → stdout.
//! Line classification is heuristic and line-oriented; there is no parser.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod pattern;
pub mod render;
pub mod scanner;
pub mod walker;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, ExitCode, Result};
