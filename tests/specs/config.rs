//! Behavioral specs for findit.toml handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Config in the search root is discovered and applied.
#[test]
fn discovered_config_sets_extensions() {
    let dir = temp_tree(&[
        ("findit.toml", "[search]\nextensions = [\"pyi\"]\n"),
        ("a.py", "token = 1\n"),
        ("b.pyi", "token = 2\n"),
    ]);
    findit_cmd()
        .args(["token", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("./b.pyi :1\ttoken = 2\n");
}

/// > Config can turn on case-insensitive matching.
#[test]
fn config_ignore_case() {
    let dir = temp_tree(&[
        ("findit.toml", "[search]\nignore_case = true\n"),
        ("a.py", "TOKEN = 1\n"),
    ]);
    findit_cmd()
        .args(["token", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("./a.py :1\tTOKEN = 1\n");
}

/// > Config excludes are relative to the search root.
#[test]
fn config_excludes() {
    let dir = temp_tree(&[
        ("findit.toml", "[walk]\nexclude = [\"venv\"]\n"),
        ("a.py", "token = 1\n"),
        ("venv/lib.py", "token = 2\n"),
    ]);
    findit_cmd()
        .args(["token", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("./a.py :1\ttoken = 1\n");
}

/// > An explicit --config that cannot be parsed is fatal.
#[test]
fn invalid_explicit_config_is_fatal() {
    let dir = temp_tree(&[("bad.toml", "[search\n"), ("a.py", "token = 1\n")]);
    findit_cmd()
        .args(["token", "--config", "bad.toml"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicates::str::contains("bad.toml"));
}

/// > Unknown config keys are rejected.
#[test]
fn unknown_config_key_is_fatal() {
    let dir = temp_tree(&[
        ("findit.toml", "[search]\nextension = [\"py\"]\n"),
        ("a.py", "token = 1\n"),
    ]);
    findit_cmd()
        .args(["token"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("invalid config"));
}

/// > --config can also come from the environment.
#[test]
fn config_from_environment() {
    let dir = temp_tree(&[
        ("custom.toml", "[search]\nextensions = [\"txt\"]\n"),
        ("notes.txt", "token = 1\n"),
    ]);
    findit_cmd()
        .args(["token", "--no-color"])
        .env("FINDIT_CONFIG", "custom.toml")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("./notes.txt :1\ttoken = 1\n");
}
