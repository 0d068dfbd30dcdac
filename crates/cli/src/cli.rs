// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;
use crate::pattern::Role;

/// Find where a keyword is declared, assigned, and used in a source tree
#[derive(Parser, Debug)]
#[command(name = "findit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Keyword to find (matched literally, not as a regex)
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// File or directory to search
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Search for class declarations only
    #[arg(short = 'c', long = "class")]
    pub class: bool,

    /// Search for function declarations only
    #[arg(short = 'd', long = "def")]
    pub def: bool,

    /// Search for variable assignments only
    #[arg(
        short = 'v',
        long = "variable",
        visible_short_alias = 'a',
        visible_alias = "assign"
    )]
    pub assign: bool,

    /// Search for other appearances only
    #[arg(short = 'o', long = "other")]
    pub other: bool,

    /// Ignore case when matching the keyword
    #[arg(short = 'i', long = "ignore-case", visible_alias = "ignorecase")]
    pub ignore_case: bool,

    /// Source file extension to search (repeatable; default: py)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Glob of paths to skip, relative to PATH (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Color output mode
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "FINDIT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Roles selected on the command line; empty means all.
    pub fn roles(&self) -> Vec<Role> {
        let mut roles = Vec::new();
        if self.class {
            roles.push(Role::ClassDecl);
        }
        if self.def {
            roles.push(Role::FunctionDecl);
        }
        if self.assign {
            roles.push(Role::Assignment);
        }
        if self.other {
            roles.push(Role::GenericUse);
        }
        roles
    }

    /// Effective color mode: `--no-color` wins, then `--color`, then config.
    pub fn color_mode(&self, configured: Option<ColorMode>) -> ColorMode {
        if self.no_color {
            ColorMode::Never
        } else {
            self.color.or(configured).unwrap_or_default()
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
