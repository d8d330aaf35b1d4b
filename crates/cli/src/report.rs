// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verdict reporting.
//!
//! The text report walks the verdict in pipeline order: generation header,
//! every reported diagnostic, diagnostic totals, output size, line
//! mismatches, line totals and the final outcome.

use crate::verify::{Classification, OutputComparison, Reconciliation, Verdict};
use clap::ValueEnum;

/// Report format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Serialized verdict
    Json,
}

/// Renders a [`Verdict`]
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    verdict: &'a Verdict,
    show_diff: bool,
}

impl<'a> Report<'a> {
    pub fn new(verdict: &'a Verdict) -> Self {
        Self {
            verdict,
            show_diff: false,
        }
    }

    /// Append a unified diff when output lines differ
    pub fn with_diff(mut self, show_diff: bool) -> Self {
        self.show_diff = show_diff;
        self
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json(),
        }
    }

    /// Pretty-printed JSON verdict
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(&self.verdict)?;
        json.push('\n');
        Ok(json)
    }

    /// Generate the text report
    pub fn to_text(&self) -> String {
        let verdict = self.verdict;
        let mut out = String::new();
        let diagnostics = &verdict.diagnostics;
        let has_errors = verdict.status != 0
            || !diagnostics.diagnostics.is_empty()
            || !diagnostics.missing.is_empty();

        if has_errors {
            write_diagnostics(&mut out, verdict);
            if verdict.fatal {
                out.push('\n');
                out.push_str(mismatch_line());
                return out;
            }
            write_tally(&mut out, diagnostics);
        } else {
            out.push_str("Generation successfully finished with no errors\n");
        }
        out.push('\n');

        if let Some(output) = &verdict.output {
            write_output(&mut out, output, self.show_diff);
        }

        if verdict.success {
            out.push_str("Generated output and errors exactly match expected ones\n");
        } else {
            out.push_str(mismatch_line());
        }
        out
    }
}

fn mismatch_line() -> &'static str {
    "Generated output and/or errors do not match expected ones\n"
}

fn write_diagnostics(out: &mut String, verdict: &Verdict) {
    if verdict.fatal {
        out.push_str(&format!(
            "Generation terminated with status {} due to following errors:\n",
            verdict.status
        ));
    } else {
        out.push_str(&format!(
            "Generation finished with status {} with following errors:\n",
            verdict.status
        ));
    }
    out.push('\n');

    for diagnostic in &verdict.diagnostics.diagnostics {
        let label = match diagnostic.classification {
            Classification::Expected => "Expected error",
            Classification::ExpectedDuplicate => "Expected error (DUP)",
            Classification::Unexpected => "Unexpected error",
            Classification::UnexpectedDuplicate => "Unexpected error (DUP)",
        };
        let entry = &diagnostic.entry;
        out.push_str(&format!("{}: {}\n", label, entry.message));
        out.push_str(&format!(
            "\tLevel: {} ({})\n",
            entry.level,
            entry.level_name()
        ));
        out.push_str(&format!("\tFile: {}\n", entry.filename));
        out.push_str(&format!("\tPosition: {}\n", entry.position()));
    }

    for missing in &verdict.diagnostics.missing {
        out.push_str("Missing expected error:\n");
        out.push_str(&format!("\tFile: {}\n", missing.file));
        out.push_str(&format!("\tPosition: {}\n", missing.position));
    }
}

fn write_tally(out: &mut String, diagnostics: &Reconciliation) {
    let tally = &diagnostics.tally;
    out.push('\n');
    if tally.expected == 0 {
        out.push_str("No errors were expected\n");
    } else if tally.missing_expected == 0 {
        out.push_str("All expected errors were generated\n");
    } else {
        out.push_str("There are some expected errors that were not generated\n");
    }
    out.push('\n');

    out.push_str("Total errors:\n");
    out.push_str(&format!("\tReported: {}\n", tally.reported));
    out.push_str(&format!("\t\tUnique: {}\n", tally.unique()));
    out.push_str(&format!("\t\tDuplicates: {}\n", tally.duplicates()));
    out.push_str(&format!("\tExpected: {}\n", tally.expected));
    out.push_str(&format!("\tMatched: {}\n", tally.matched));
    out.push_str(&format!("\t\tDuplicates: {}\n", tally.duplicate_matched));
    out.push_str(&format!("\tUnexpected: {}\n", tally.unexpected));
    out.push_str(&format!("\t\tDuplicates: {}\n", tally.duplicate_unexpected));
}

fn write_output(out: &mut String, output: &OutputComparison, show_diff: bool) {
    if output.same_size() {
        out.push_str(&format!(
            "Generated output has the same size as expected one ({} bytes)\n",
            output.actual_bytes
        ));
    } else {
        out.push_str(&format!(
            "Generated output has different size than expected one ({} and {} bytes)\n",
            output.actual_bytes, output.golden_bytes
        ));
    }
    out.push('\n');

    for mismatch in &output.mismatches {
        out.push_str(&format!("Line mismatch at line {}:\n", mismatch.line_number()));
        out.push_str(&format!("\t- {}\n", mismatch.expected));
        out.push_str(&format!("\t+ {}\n", mismatch.actual));
    }
    if output.actual_remaining > 0 {
        out.push_str(&format!(
            "Run out of expected output's lines while generated one still have {} more to go\n",
            output.actual_remaining
        ));
    }
    if output.golden_remaining > 0 {
        out.push_str(&format!(
            "Run out of generated output's lines while expected one still have {} more to go\n",
            output.golden_remaining
        ));
    }
    if !output.is_match() {
        out.push('\n');
    }

    out.push_str("Total lines:\n");
    out.push_str(&format!("\tChecked: {}\n", output.checked));
    out.push_str(&format!("\tExpected: {}\n", output.expected_lines));
    out.push_str(&format!("\tGenerated: {}\n", output.generated_lines));

    if show_diff {
        if let Some(diff) = output.unified_diff() {
            out.push('\n');
            out.push_str(&diff);
            if !diff.ends_with('\n') {
                out.push('\n');
            }
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
