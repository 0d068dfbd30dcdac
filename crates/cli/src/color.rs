// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color mode resolution and the emphasis scheme.

use std::io::IsTerminal;

use serde::Deserialize;

/// When to emit color escapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against the current environment and stdout.
    pub fn should_color(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                resolve_auto(std::env::var_os("NO_COLOR").is_some(), std::io::stdout().is_terminal())
            }
        }
    }
}

/// Auto mode: `NO_COLOR` wins, otherwise color only on a terminal.
pub fn resolve_auto(no_color_env: bool, is_terminal: bool) -> bool {
    !no_color_env && is_terminal
}

/// Emphasis styles.
pub mod scheme {
    use anstyle::{AnsiColor, Style};

    /// The searched keyword.
    pub fn found() -> Style {
        Style::new().bold().fg_color(Some(AnsiColor::Green.into()))
    }

    /// `class`, `def` and `=`.
    pub fn structural() -> Style {
        Style::new().bold().fg_color(Some(AnsiColor::Red.into()))
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
