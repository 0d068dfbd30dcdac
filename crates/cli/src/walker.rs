// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source file discovery.
//!
//! Uses the `ignore` crate's sequential walker. Unlike most tools built on
//! it, the standard filters are off by default: hidden files and
//! `.gitignore`d files are searched unless the config turns them on.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// Configuration for the file walker.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// File extensions to search, without the leading dot.
    pub extensions: Vec<String>,

    /// Glob patterns relative to the root. Matching files and directories
    /// are skipped.
    pub exclude_patterns: Vec<String>,

    /// Honour `.gitignore`, `.git/info/exclude` and global git ignores.
    pub git_ignore: bool,

    /// Skip hidden files and directories.
    pub hidden: bool,

    /// Maximum directory depth (None = unlimited).
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            exclude_patterns: Vec::new(),
            git_ignore: false,
            hidden: false,
            max_depth: None,
        }
    }
}

/// Extension searched when none is configured.
pub const DEFAULT_EXTENSION: &str = "py";

/// A file yielded by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    pub path: PathBuf,
    /// Depth below the root (the root itself is 0).
    pub depth: usize,
}

/// Counters collected while walking.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    /// Files yielded.
    pub files_found: usize,
    /// Files seen but not yielded because of their extension.
    pub files_skipped: usize,
    /// Entries that could not be read.
    pub errors: usize,
}

/// Walks a root and yields candidate source files.
pub struct FileWalker {
    config: WalkerConfig,
    exclude: GlobSet,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let exclude = build_glob_set(&normalize_exclude_patterns(&config.exclude_patterns));
        Self { config, exclude }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Whether `path` has one of the configured extensions.
    pub fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.config.extensions.iter().any(|want| want == ext))
    }

    /// Lazily walk `root`. A root that is a file is yielded whatever its
    /// extension.
    pub fn walk(&self, root: &Path) -> Walk<'_> {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .follow_links(false)
            .max_depth(self.config.max_depth);

        if !self.exclude.is_empty() {
            let exclude = self.exclude.clone();
            let base = root.to_path_buf();
            builder.filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let rel = entry.path().strip_prefix(&base).unwrap_or(entry.path());
                !exclude.is_match(rel)
            });
        }

        Walk {
            inner: builder.build(),
            walker: self,
            stats: WalkStats::default(),
        }
    }

    /// Walk `root` to completion.
    #[cfg(test)]
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let mut walk = self.walk(root);
        let files: Vec<WalkedFile> = walk.by_ref().collect();
        (files, walk.stats())
    }
}

/// Iterator over the source files below a root.
pub struct Walk<'a> {
    inner: ignore::Walk,
    walker: &'a FileWalker,
    stats: WalkStats,
}

impl Walk<'_> {
    /// Counters so far.
    pub fn stats(&self) -> WalkStats {
        self.stats
    }
}

impl Iterator for Walk<'_> {
    type Item = WalkedFile;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!("skipping unreadable entry: {}", err);
                    self.stats.errors += 1;
                    continue;
                }
            };

            let Some(file_type) = entry.file_type() else {
                continue;
            };
            // Symlinked directories are not entered; symlinked files are searched.
            let is_file =
                file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            let depth = entry.depth();
            if depth > 0 && !self.walker.is_source_file(entry.path()) {
                self.stats.files_skipped += 1;
                continue;
            }

            self.stats.files_found += 1;
            return Some(WalkedFile {
                path: entry.into_path(),
                depth,
            });
        }
    }
}

/// Normalize exclude patterns to glob patterns.
///
/// - `dir/` → `dir/**`
/// - `name` → `name` and `name/**` (bare name: a file or a whole directory)
/// - anything containing `*` is kept as-is
pub fn normalize_exclude_patterns(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|p| {
            if p.ends_with('/') {
                vec![format!("{}**", p)]
            } else if !p.contains('*') {
                vec![p.clone(), format!("{}/**", p)]
            } else {
                vec![p.clone()]
            }
        })
        .collect()
}

/// Build a GlobSet, skipping (and logging) invalid patterns.
pub fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(err) => tracing::warn!("invalid exclude pattern {}: {}", pattern, err),
        }
    }
    builder.build().unwrap_or_else(|err| {
        tracing::warn!("failed to build exclude set: {}", err);
        GlobSet::empty()
    })
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
