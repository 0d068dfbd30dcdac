// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Display lines for matched source lines.
//!
//! Output shape: `<path> :<line>\t<fragments>`, with the keyword and the
//! structural markers (`class`, `def`, `=`) wrapped in emphasis.

use std::fmt::Write;
use std::path::Path;

use anstyle::Style;

use crate::color::scheme;
use crate::pattern::{MatchResult, STRUCTURAL_MARKERS};

/// A matched line, ready to render. Built and dropped per line.
#[derive(Debug)]
pub struct ScanHit<'a> {
    pub path: &'a Path,
    /// 1-based line number.
    pub line_number: usize,
    pub keyword: &'a str,
    pub result: MatchResult<'a>,
}

/// Emphasis styles applied to fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub found: Style,
    pub structural: Style,
}

impl Palette {
    /// Bold green keyword, bold red markers.
    pub fn colored() -> Self {
        Self {
            found: scheme::found(),
            structural: scheme::structural(),
        }
    }

    /// No escapes at all.
    pub fn plain() -> Self {
        Self {
            found: Style::new(),
            structural: Style::new(),
        }
    }

    pub fn for_color(enabled: bool) -> Self {
        if enabled { Self::colored() } else { Self::plain() }
    }
}

/// Renders [`ScanHit`]s into terminal lines.
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Render a hit without a trailing newline.
    pub fn render(&self, hit: &ScanHit<'_>) -> String {
        let fragments = &hit.result.fragments;
        let matched_len: usize = fragments.iter().map(|f| f.len()).sum();
        let mut out = String::with_capacity(matched_len + 64);

        // The matched keyword text; under case-insensitive matching it may
        // differ in case from the keyword as typed.
        let found = fragments
            .get(hit.result.keyword_index)
            .copied()
            .unwrap_or(hit.keyword);

        // Writing to a String cannot fail.
        let _ = write!(out, "{} :{}\t", hit.path.display(), hit.line_number);
        for (index, fragment) in fragments.iter().enumerate() {
            let is_keyword =
                index == hit.result.keyword_index || *fragment == found || *fragment == hit.keyword;
            match self.emphasis(fragment, is_keyword) {
                Some(style) => {
                    let _ = write!(out, "{}{}{}", style.render(), fragment, style.render_reset());
                }
                None => out.push_str(fragment),
            }
        }
        out
    }

    fn emphasis(&self, fragment: &str, is_keyword: bool) -> Option<Style> {
        if is_keyword {
            Some(self.palette.found)
        } else if STRUCTURAL_MARKERS.contains(&fragment) {
            Some(self.palette.structural)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
