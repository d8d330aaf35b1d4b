// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Index of diagnostics a fixture expects the render to report.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Source position of a diagnostic. Displays as the `line:column` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Final path component of a source file name.
///
/// Both `/` and `\` separate components, so engine logs produced on either
/// platform key into the same index entry.
pub fn basename(filename: &str) -> &str {
    filename.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(filename)
}

/// Result of marking a reported position against the index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    /// Declared and seen for the first time
    Matched,
    /// Declared and already matched earlier
    AlreadyMatched,
    /// Not declared for this file
    Undeclared,
}

/// Expected diagnostic positions per source file basename, each with a
/// matched flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticIndex {
    files: BTreeMap<String, BTreeMap<Position, bool>>,
    declared: usize,
}

impl DiagnosticIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an expected diagnostic.
    ///
    /// Returns `false` when the same position is already declared for the
    /// file, leaving the index unchanged.
    pub fn declare(&mut self, file: &str, position: Position) -> bool {
        let positions = self.files.entry(basename(file).to_string()).or_default();
        if positions.contains_key(&position) {
            return false;
        }
        positions.insert(position, false);
        self.declared += 1;
        true
    }

    /// Mark a reported diagnostic as seen
    pub fn mark(&mut self, filename: &str, position: Position) -> MarkOutcome {
        let Some(matched) = self
            .files
            .get_mut(basename(filename))
            .and_then(|positions| positions.get_mut(&position))
        else {
            return MarkOutcome::Undeclared;
        };
        if *matched {
            MarkOutcome::AlreadyMatched
        } else {
            *matched = true;
            MarkOutcome::Matched
        }
    }

    /// Matched flag of a declared position, `None` when undeclared
    pub fn is_matched(&self, filename: &str, position: Position) -> Option<bool> {
        self.files
            .get(basename(filename))
            .and_then(|positions| positions.get(&position))
            .copied()
    }

    /// Number of declarations inserted, regardless of match state
    pub fn expected_count(&self) -> usize {
        self.declared
    }

    pub fn matched_count(&self) -> usize {
        self.entries().filter(|(_, _, matched)| *matched).count()
    }

    /// Declared positions never matched, ordered by file then position
    pub fn unmatched(&self) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.entries()
            .filter(|(_, _, matched)| !*matched)
            .map(|(file, position, _)| (file, position))
    }

    /// All declarations as `(file, position, matched)`
    pub fn entries(&self) -> impl Iterator<Item = (&str, Position, bool)> + '_ {
        self.files.iter().flat_map(|(file, positions)| {
            positions
                .iter()
                .map(move |(position, matched)| (file.as_str(), *position, *matched))
        })
    }

    /// File basenames with at least one declaration
    pub fn files(&self) -> impl Iterator<Item = &str> + '_ {
        self.files.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.declared == 0
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
