// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `findit.toml` configuration.
//!
//! ```toml
//! [search]
//! extensions = ["py", "pyi"]
//! ignore_case = false
//! color = "auto"
//!
//! [walk]
//! exclude = ["venv", "build/", "**/migrations/*.py"]
//! gitignore = false
//! skip_hidden = false
//! max_depth = 50
//! ```
//!
//! Command-line flags take priority over these values.

use std::path::Path;

use serde::Deserialize;

use crate::color::ColorMode;
use crate::error::{Error, Result};
use crate::walker::{DEFAULT_EXTENSION, WalkerConfig};

/// File name looked up by [`crate::discovery::find_config`].
pub const CONFIG_FILE_NAME: &str = "findit.toml";

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub search: SearchConfig,
    pub walk: WalkConfig,
}

/// Matching and output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Source file extensions, with or without a leading dot.
    #[serde(default = "SearchConfig::default_extensions")]
    pub extensions: Vec<String>,

    /// Case-insensitive matching unless overridden on the command line.
    pub ignore_case: bool,

    /// Color mode used when `--color` is not given.
    pub color: Option<ColorMode>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            extensions: Self::default_extensions(),
            ignore_case: false,
            color: None,
        }
    }
}

impl SearchConfig {
    fn default_extensions() -> Vec<String> {
        vec![DEFAULT_EXTENSION.to_string()]
    }
}

/// Directory walking settings.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalkConfig {
    /// Exclude globs, relative to the search root.
    pub exclude: Vec<String>,

    /// Honour `.gitignore` files.
    pub gitignore: bool,

    /// Skip hidden files and directories.
    pub skip_hidden: bool,

    /// Maximum directory depth.
    pub max_depth: Option<usize>,
}

impl Config {
    /// Build the walker configuration, letting non-empty CLI values win.
    pub fn walker_config(&self, extensions: &[String], exclude: &[String]) -> WalkerConfig {
        let extensions = if extensions.is_empty() {
            self.search.extensions.as_slice()
        } else {
            extensions
        };

        let mut exclude_patterns = self.walk.exclude.clone();
        for pattern in exclude {
            if !exclude_patterns.contains(pattern) {
                exclude_patterns.push(pattern.clone());
            }
        }

        WalkerConfig {
            extensions: normalize_extensions(extensions),
            exclude_patterns,
            git_ignore: self.walk.gitignore,
            hidden: self.walk.skip_hidden,
            max_depth: self.walk.max_depth,
        }
    }
}

/// Strip leading dots and drop empty entries. Falls back to the default
/// extension if nothing is left.
pub fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_string())
        .filter(|e| !e.is_empty())
        .collect();
    normalized.dedup();
    if normalized.is_empty() {
        normalized.push(DEFAULT_EXTENSION.to_string());
    }
    normalized
}

/// Load and parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Parse config content; `path` is used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string().trim_end().to_string(),
    })?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
