// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword-bound patterns and the first-match-wins line matcher.
//!
//! The `regex` crate has no look-around, so the context rules (comment lines,
//! declaration lines, trailing identifier characters) are checked in code
//! around the compiled expressions.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::role::Role;

/// Errors from compiling keyword patterns.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("cannot build {role} pattern for keyword {keyword:?}: {source}")]
    Compile {
        role: Role,
        keyword: String,
        #[source]
        source: regex::Error,
    },
}

/// A line starting with `class` or `def` in column 0 is never a plain use.
/// Indented declarations can still report the keyword in their parameters.
#[allow(clippy::expect_used)]
static DECLARATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:class|def)").expect("valid regex pattern"));

/// Text after a plain use must not continue an identifier or start an assignment.
#[allow(clippy::expect_used)]
static TRAILING_IDENT_OR_ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[=\w]").expect("valid regex pattern"));

/// Whether `line` is treated as a comment and excluded from every role.
///
/// Any `#` disqualifies the whole line, including one inside a string
/// literal or a trailing comment after real code.
pub fn is_comment_line(line: &str) -> bool {
    memchr::memchr(b'#', line.as_bytes()).is_some()
}

/// Characters that may directly precede a plain use of the keyword.
fn is_use_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | '[' | '.' | ',')
}

/// Ordered fragments of a matched line, tagged with the role that matched.
///
/// Concatenating the fragments gives back the matched line exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub role: Role,
    pub fragments: Vec<&'a str>,
    /// Index into `fragments` of the text the keyword pattern matched.
    pub keyword_index: usize,
}

#[derive(Debug, Clone)]
enum Extractor {
    /// Whole-line regex whose capture groups are the fragments.
    Anchored(Regex),
    /// Keyword probe; prefix and trailing context are checked around it.
    Use(Regex),
}

/// A role template bound to one keyword and case mode.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    role: Role,
    extractor: Extractor,
}

impl CompiledPattern {
    /// Compile `role` for a literal `keyword`.
    pub fn compile(role: Role, keyword: &str, ignore_case: bool) -> Result<Self, PatternError> {
        let escaped = regex::escape(keyword);
        let keyword_expr = if ignore_case {
            format!("(?i:{escaped})")
        } else {
            escaped
        };

        let regex = RegexBuilder::new(&role.instantiate(&keyword_expr))
            .build()
            .map_err(|source| PatternError::Compile {
                role,
                keyword: keyword.to_string(),
                source,
            })?;

        let extractor = match role {
            Role::GenericUse => Extractor::Use(regex),
            _ => Extractor::Anchored(regex),
        };
        Ok(Self { role, extractor })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Test one line (without its terminator).
    pub fn captures<'a>(&self, line: &'a str) -> Option<MatchResult<'a>> {
        if is_comment_line(line) {
            return None;
        }

        let (fragments, keyword_index) = match &self.extractor {
            Extractor::Anchored(regex) => {
                let caps = regex.captures(line)?;
                let keyword_group = self.role.keyword_group();
                let mut fragments = Vec::with_capacity(caps.len());
                let mut keyword_index = 0;
                for (group, m) in caps.iter().enumerate().skip(1) {
                    let Some(m) = m.filter(|m| !m.is_empty()) else {
                        continue;
                    };
                    if group == keyword_group {
                        keyword_index = fragments.len();
                    }
                    fragments.push(m.as_str());
                }
                (fragments, keyword_index)
            }
            Extractor::Use(probe) => {
                // A qualifying use always has a non-empty prefix.
                let (start, end) = last_plain_use(probe, line)?;
                let mut fragments = vec![&line[..start], &line[start..end]];
                if end < line.len() {
                    fragments.push(&line[end..]);
                }
                (fragments, 1)
            }
        };

        Some(MatchResult {
            role: self.role,
            fragments,
            keyword_index,
        })
    }
}

/// Byte range of the last keyword occurrence that qualifies as a plain use.
///
/// Picking the last one mirrors a greedy prefix: everything up to the final
/// qualifying occurrence is reported as prefix.
fn last_plain_use(probe: &Regex, line: &str) -> Option<(usize, usize)> {
    if DECLARATION_LINE.is_match(line) {
        return None;
    }

    let mut found = None;
    let mut prev = None;
    for (start, c) in line.char_indices() {
        if let Some(p) = prev
            && is_use_boundary(p)
            && let Some(m) = probe.find(&line[start..])
        {
            let end = start + m.end();
            if !TRAILING_IDENT_OR_ASSIGN.is_match(&line[end..]) {
                found = Some((start, end));
            }
        }
        prev = Some(c);
    }
    found
}

/// Applies the active roles to lines in precedence order.
#[derive(Debug, Clone)]
pub struct LineMatcher {
    keyword: String,
    ignore_case: bool,
    patterns: Vec<CompiledPattern>,
}

impl LineMatcher {
    /// Compile every selected role for `keyword`. An empty selection means all roles.
    pub fn new(keyword: &str, roles: &[Role], ignore_case: bool) -> Result<Self, PatternError> {
        let patterns = Role::ordered(roles)
            .into_iter()
            .map(|role| CompiledPattern::compile(role, keyword, ignore_case))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            keyword: keyword.to_string(),
            ignore_case,
            patterns,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Active roles in the order they are tried.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.patterns.iter().map(CompiledPattern::role)
    }

    /// First role that matches `line`, if any.
    pub fn find<'a>(&self, line: &'a str) -> Option<MatchResult<'a>> {
        if is_comment_line(line) {
            return None;
        }
        self.patterns.iter().find_map(|p| p.captures(line))
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
