// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the search root up to the git root looking for findit.toml.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;

/// Find findit.toml starting from `start` and walking up to git root.
///
/// When `start` is a file, the search begins in its directory.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = if start.is_file() {
        start.parent()?.to_path_buf()
    } else {
        start.to_path_buf()
    };

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        // Move up one directory
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
