// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line classification for keyword search.
//!
//! Four role templates, tried in a fixed order:
//! - `class KEY(...)`: class declaration
//! - `def KEY(...)`: function declaration
//! - `KEY = ...`: assignment
//! - `... KEY ...`: any other use
//!
//! Lines containing `#` are treated as comments and never match.

pub mod matcher;
pub mod role;

pub use matcher::{CompiledPattern, LineMatcher, MatchResult, PatternError, is_comment_line};
pub use role::{Role, STRUCTURAL_MARKERS};
