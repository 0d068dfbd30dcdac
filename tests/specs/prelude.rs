//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing findit CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::path::PathBuf;
use std::process::{Command, Output};

pub const FOUND: &str = "\x1b[1m\x1b[32m";
pub const MARKER: &str = "\x1b[1m\x1b[31m";
pub const RESET: &str = "\x1b[0m";

/// Returns a Command configured to run the findit binary
pub fn findit_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("findit"));
    cmd.env_remove("FINDIT_CONFIG")
        .env_remove("FINDIT_LOG")
        .env_remove("NO_COLOR");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run findit in `dir` with `args` (color off) and return the output.
pub fn run_in(dir: &std::path::Path, args: &[&str]) -> Output {
    findit_cmd()
        .args(args)
        .arg("--no-color")
        .current_dir(dir)
        .output()
        .expect("command should run")
}

/// Stdout split into lines, sorted so walk order does not matter.
pub fn sorted_stdout_lines(output: &Output) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.replace('\\', "/"))
        .collect();
    lines.sort();
    lines
}

/// Create files under a fresh temp dir.
pub fn temp_tree(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    for (path, content) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }
    dir
}
