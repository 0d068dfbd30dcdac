// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Syntactic roles a matched line can play, and their line templates.

use std::fmt;

/// Placeholder replaced by the escaped keyword when a template is compiled.
pub const KEYWORD_PLACEHOLDER: &str = "{keyword}";

/// Fragments that are emphasized as structure rather than as the keyword.
pub const STRUCTURAL_MARKERS: [&str; 3] = ["class", "def", "="];

/// `class Name(...)`, optionally indented.
const CLASS_TEMPLATE: &str = r"^(\s*)(class)(\s+)({keyword})(\s*\(.*)$";

/// `def name(...)`, optionally indented.
const DEF_TEMPLATE: &str = r"^(\s*)(def)(\s+)({keyword})(\s*\(.*)$";

/// `name = value`, where the `=` is not the start of `==`.
const ASSIGN_TEMPLATE: &str = r"^(\s*)({keyword})(\s*)(=)((?:[^=].*)?)$";

/// Probe for the keyword itself; the surrounding context is checked in code.
const USE_TEMPLATE: &str = r"^(?:{keyword})";

/// Syntactic classification of a matched line.
///
/// Variants are declared in precedence order: when several roles could
/// describe one line, the earliest wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    ClassDecl,
    FunctionDecl,
    Assignment,
    GenericUse,
}

impl Role {
    /// All roles in precedence order.
    pub const ALL: [Role; 4] = [
        Role::ClassDecl,
        Role::FunctionDecl,
        Role::Assignment,
        Role::GenericUse,
    ];

    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Role::ClassDecl => "class",
            Role::FunctionDecl => "def",
            Role::Assignment => "assignment",
            Role::GenericUse => "other",
        }
    }

    /// Un-instantiated regex template containing [`KEYWORD_PLACEHOLDER`].
    pub fn template(self) -> &'static str {
        match self {
            Role::ClassDecl => CLASS_TEMPLATE,
            Role::FunctionDecl => DEF_TEMPLATE,
            Role::Assignment => ASSIGN_TEMPLATE,
            Role::GenericUse => USE_TEMPLATE,
        }
    }

    /// Capture group of the keyword in the anchored templates.
    ///
    /// The plain-use probe has no groups and returns 0.
    pub(crate) fn keyword_group(self) -> usize {
        match self {
            Role::ClassDecl | Role::FunctionDecl => 4,
            Role::Assignment => 2,
            Role::GenericUse => 0,
        }
    }

    /// Instantiate the template with an already-escaped keyword expression.
    pub fn instantiate(self, keyword_expr: &str) -> String {
        self.template().replace(KEYWORD_PLACEHOLDER, keyword_expr)
    }

    /// Sort and dedup a role selection into precedence order.
    ///
    /// An empty selection means every role is active.
    pub fn ordered(selection: &[Role]) -> Vec<Role> {
        if selection.is_empty() {
            return Self::ALL.to_vec();
        }
        let mut roles = selection.to_vec();
        roles.sort();
        roles.dedup();
        roles
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "role_tests.rs"]
mod tests;
