// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `findit <KEYWORD> [PATH]` implementation.
//!
//! Resolves config, compiles the keyword patterns, then walks and scans
//! files one at a time. The scanner flushes stdout after every hit.

use std::io;

use anyhow::Context;

use findit::cli::Cli;
use findit::config::{self, Config};
use findit::discovery;
use findit::error::{Error, ExitCode, validate_keyword};
use findit::pattern::LineMatcher;
use findit::render::{Palette, Renderer};
use findit::scanner::{ScanStats, Scanner};
use findit::walker::FileWalker;

/// Run a search.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    validate_keyword(&cli.keyword)?;

    if !cli.path.exists() {
        return Err(Error::InvalidPath {
            path: cli.path.clone(),
        }
        .into());
    }

    let config = load_config(cli)?;
    let ignore_case = cli.ignore_case || config.search.ignore_case;
    let matcher =
        LineMatcher::new(&cli.keyword, &cli.roles(), ignore_case).map_err(Error::from)?;
    let palette = Palette::for_color(cli.color_mode(config.search.color).should_color());
    let renderer = Renderer::new(palette);
    let scanner = Scanner::new(&matcher, &renderer);
    let walker = FileWalker::new(config.walker_config(&cli.extensions, &cli.exclude));

    tracing::debug!(
        "searching {} for {:?} (roles: {}; extensions: {:?}; ignore case: {})",
        cli.path.display(),
        matcher.keyword(),
        matcher.roles().map(|r| r.name()).collect::<Vec<_>>().join(", "),
        walker.config().extensions,
        matcher.ignore_case(),
    );

    let mut out = io::stdout().lock();
    let mut totals = ScanStats::default();
    let mut files = 0usize;

    let mut walk = walker.walk(&cli.path);
    for file in walk.by_ref() {
        tracing::trace!("scanning {} (depth {})", file.path.display(), file.depth);
        let stats = scanner.scan(&file.path, &mut out).map_err(Error::from)?;
        totals.add(stats);
        files += 1;
    }

    let walk_stats = walk.stats();
    tracing::debug!(
        "scanned {} files ({} lines, {} undecodable), {} hits; {} files skipped by extension, {} unreadable entries",
        files,
        totals.lines,
        totals.skipped_lines,
        totals.hits,
        walk_stats.files_skipped,
        walk_stats.errors,
    );

    Ok(ExitCode::Success)
}

/// Explicit `--config` first, then discovery from the search root.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        return config::load(path)
            .map_err(anyhow::Error::from)
            .with_context(|| format!("loading --config {}", path.display()));
    }

    let start = cli.path.canonicalize().unwrap_or_else(|_| cli.path.clone());
    match discovery::find_config(&start) {
        Some(path) => Ok(config::load(&path)?),
        None => Ok(Config::default()),
    }
}
