// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verification engine.
//!
//! Reconciles the render's diagnostic log against the fixture's declared
//! diagnostics, then compares the generated output with the golden file.

pub mod compare;
pub mod reconcile;

pub use compare::{
    canonical_output_lines, compare_output, GoldenOutput, LineMismatch, OutputComparison,
};
pub use reconcile::{
    reconcile, Classification, ClassifiedDiagnostic, DiagnosticTally, MissingDiagnostic,
    Reconciliation,
};

use crate::render::RenderResult;
use serde::Serialize;
use tengcheck_fixture::DiagnosticIndex;

/// Overall outcome of one check
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Status returned by the render
    pub status: i32,
    /// Generation was terminated before producing output
    pub fatal: bool,
    pub diagnostics: Reconciliation,
    /// Absent when generation was fatal
    pub output: Option<OutputComparison>,
    pub success: bool,
}

impl Verdict {
    /// Process exit code for a completed check.
    ///
    /// The negated render status wrapped into a byte, so a clean render
    /// (status 0) exits 0.
    pub fn status_exit_code(&self) -> i32 {
        self.status.wrapping_neg().rem_euclid(256)
    }
}

/// Verify one render result against the fixture's diagnostics and golden output.
///
/// Diagnostics are always reconciled. A fatal render skips output comparison
/// and never succeeds.
pub fn verify(index: DiagnosticIndex, result: &RenderResult, golden: &GoldenOutput) -> Verdict {
    let (_, diagnostics) = reconcile(index, &result.error_log);
    let fatal = result.is_fatal();

    let output = (!fatal).then(|| compare_output(&result.output, golden));
    let output_matches = output.as_ref().is_some_and(OutputComparison::is_match);
    let success = !fatal && diagnostics.tally.is_clean() && output_matches;

    Verdict {
        status: result.status,
        fatal,
        diagnostics,
        output,
        success,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
