// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal errors and process exit codes.
//!
//! Unreadable files and undecodable lines are not errors: the scanner
//! skips them. Everything here ends the run.

use std::io;
use std::path::PathBuf;

use crate::pattern::PatternError;

/// Errors that stop a search before or while it runs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid keyword {keyword:?}: {reason}")]
    InvalidKeyword { keyword: String, reason: &'static str },

    #[error("path does not exist: {}", path.display())]
    InvalidPath { path: PathBuf },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Search finished, with or without hits.
    Success = 0,
    /// Runtime failure: missing path, bad config.
    Error = 1,
    /// Bad invocation. Matches clap's own usage exit code.
    Usage = 2,
}

impl Error {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::InvalidKeyword { .. } => ExitCode::Usage,
            _ => ExitCode::Error,
        }
    }

    /// A closed stdout (e.g. piped into `head`) ends the run cleanly.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Io(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Check that `keyword` can be searched for.
pub fn validate_keyword(keyword: &str) -> Result<()> {
    let reason = if keyword.trim().is_empty() {
        "keyword must not be empty"
    } else if keyword.contains(['\n', '\r']) {
        "keyword must fit on one line"
    } else {
        return Ok(());
    };
    Err(Error::InvalidKeyword {
        keyword: keyword.to_string(),
        reason,
    })
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
