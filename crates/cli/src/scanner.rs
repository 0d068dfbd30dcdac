// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file line scan.
//!
//! Files that cannot be opened are skipped without output. Lines that are
//! not valid UTF-8 are skipped individually. Each hit is written and
//! flushed to the sink as soon as it is found, in file order.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::pattern::LineMatcher;
use crate::render::{Renderer, ScanHit};

/// Counters for one scanned file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Lines read, including skipped ones.
    pub lines: usize,
    /// Lines skipped because they are not valid UTF-8.
    pub skipped_lines: usize,
    /// Lines written to the sink.
    pub hits: usize,
}

impl ScanStats {
    pub fn add(&mut self, other: ScanStats) {
        self.lines += other.lines;
        self.skipped_lines += other.skipped_lines;
        self.hits += other.hits;
    }
}

/// Applies a [`LineMatcher`] to files and writes rendered hits.
pub struct Scanner<'a> {
    matcher: &'a LineMatcher,
    renderer: &'a Renderer,
}

impl<'a> Scanner<'a> {
    pub fn new(matcher: &'a LineMatcher, renderer: &'a Renderer) -> Self {
        Self { matcher, renderer }
    }

    /// Scan the file at `path`.
    ///
    /// Only errors from writing to `out` are returned.
    pub fn scan<W: Write + ?Sized>(&self, path: &Path, out: &mut W) -> io::Result<ScanStats> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(err) => {
                tracing::debug!("skipping {}: {}", path.display(), err);
                return Ok(ScanStats::default());
            }
        };
        self.scan_reader(path, BufReader::new(file), out)
    }

    /// Scan already-open content, reporting hits against `path`.
    pub fn scan_reader<R: BufRead, W: Write + ?Sized>(
        &self,
        path: &Path,
        mut reader: R,
        out: &mut W,
    ) -> io::Result<ScanStats> {
        let mut stats = ScanStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) => {
                    // Directories and other special files fail on first read.
                    tracing::debug!("stopped reading {}: {}", path.display(), err);
                    break;
                }
            }

            for raw in split_lines(&buf) {
                stats.lines += 1;

                let Ok(line) = std::str::from_utf8(raw) else {
                    tracing::trace!("{}:{}: not valid UTF-8", path.display(), stats.lines);
                    stats.skipped_lines += 1;
                    continue;
                };

                if let Some(result) = self.matcher.find(line) {
                    let hit = ScanHit {
                        path,
                        line_number: stats.lines,
                        keyword: self.matcher.keyword(),
                        result,
                    };
                    writeln!(out, "{}", self.renderer.render(&hit))?;
                    out.flush()?;
                    stats.hits += 1;
                }
            }
        }

        Ok(stats)
    }
}

/// Split one `\n`-terminated chunk into lines without their endings.
///
/// `\r\n`, `\n` and a bare `\r` all end a line, so old Mac files are
/// numbered the same way a text-mode reader would number them.
fn split_lines(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let body = body.strip_suffix(b"\r").unwrap_or(body);
    body.split(|&b| b == b'\r')
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
