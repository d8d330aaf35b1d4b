// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reconciliation of reported diagnostics against the expected index.
//!
//! Matching is purely positional: basename of the reporting file plus
//! `line:column`. Message text is never compared.

use crate::render::DiagnosticEntry;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tengcheck_fixture::{basename, DiagnosticIndex, MarkOutcome, Position};

/// How a reported diagnostic was classified
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Declared in the fixture, first report
    Expected,
    /// Declared in the fixture, reported again
    ExpectedDuplicate,
    /// Not declared
    Unexpected,
    /// Not declared, same position already reported in this run
    UnexpectedDuplicate,
}

/// A reported diagnostic with its classification
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassifiedDiagnostic {
    pub entry: DiagnosticEntry,
    pub classification: Classification,
}

/// A declared diagnostic that was never reported
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissingDiagnostic {
    pub file: String,
    pub position: Position,
}

/// Counters accumulated over one reconciliation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticTally {
    /// Diagnostics in the render's log
    pub reported: usize,
    /// Declarations in the fixture
    pub expected: usize,
    pub matched: usize,
    pub duplicate_matched: usize,
    pub unexpected: usize,
    pub duplicate_unexpected: usize,
    pub missing_expected: usize,
}

impl DiagnosticTally {
    /// Unique positions reported: every declaration plus distinct unexpected ones
    pub fn unique(&self) -> usize {
        self.expected + self.unexpected
    }

    /// Repeated reports, expected or not
    pub fn duplicates(&self) -> usize {
        self.duplicate_matched + self.duplicate_unexpected
    }

    /// No unexpected and no missing diagnostics
    pub fn is_clean(&self) -> bool {
        self.unexpected == 0 && self.duplicate_unexpected == 0 && self.missing_expected == 0
    }
}

/// Per-file positions already reported as unexpected during one run
pub type UnexpectedPositions = BTreeMap<String, BTreeSet<Position>>;

/// Outcome of reconciling one diagnostic log
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub tally: DiagnosticTally,
    /// Every reported diagnostic, in log order
    pub diagnostics: Vec<ClassifiedDiagnostic>,
    /// Declared positions never reported, ordered by file then position
    pub missing: Vec<MissingDiagnostic>,
    #[serde(skip)]
    pub unexpected_positions: UnexpectedPositions,
}

/// Classify each reported diagnostic, in log order, against the index.
///
/// The index is consumed and handed back with the matched flags updated.
pub fn reconcile(
    mut index: DiagnosticIndex,
    entries: &[DiagnosticEntry],
) -> (DiagnosticIndex, Reconciliation) {
    let mut tally = DiagnosticTally {
        reported: entries.len(),
        expected: index.expected_count(),
        ..DiagnosticTally::default()
    };
    let mut unexpected_positions = UnexpectedPositions::new();
    let mut diagnostics = Vec::with_capacity(entries.len());

    for entry in entries {
        let position = entry.position();
        let classification = match index.mark(&entry.filename, position) {
            MarkOutcome::Matched => {
                tally.matched += 1;
                Classification::Expected
            }
            MarkOutcome::AlreadyMatched => {
                tally.duplicate_matched += 1;
                Classification::ExpectedDuplicate
            }
            MarkOutcome::Undeclared => {
                let seen = unexpected_positions
                    .entry(basename(&entry.filename).to_string())
                    .or_default();
                if seen.insert(position) {
                    tally.unexpected += 1;
                    Classification::Unexpected
                } else {
                    tally.duplicate_unexpected += 1;
                    Classification::UnexpectedDuplicate
                }
            }
        };
        diagnostics.push(ClassifiedDiagnostic {
            entry: entry.clone(),
            classification,
        });
    }

    let missing: Vec<MissingDiagnostic> = index
        .unmatched()
        .map(|(file, position)| MissingDiagnostic {
            file: file.to_string(),
            position,
        })
        .collect();
    tally.missing_expected = missing.len();

    let reconciliation = Reconciliation {
        tally,
        diagnostics,
        missing,
        unexpected_positions,
    };
    (index, reconciliation)
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
