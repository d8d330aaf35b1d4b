// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-level comparison of rendered output against a golden file.
//!
//! The golden file is read as raw lines, each keeping its terminator until
//! it is canonicalized. The rendered output loses exactly one trailing
//! terminator so both sides split into the same number of lines.

use serde::Serialize;
use similar::TextDiff;
use std::path::Path;

/// Expected output read from a golden file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GoldenOutput {
    lines: Vec<String>,
    byte_len: usize,
}

impl GoldenOutput {
    /// Read a golden file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Split raw bytes after every `\n`, keeping terminators
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let lines = bytes
            .split_inclusive(|b| *b == b'\n')
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect();
        Self {
            lines,
            byte_len: bytes.len(),
        }
    }

    /// Raw lines, terminators included
    pub fn raw_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Lines with their trailing `\r` and `\n` characters removed
    pub fn canonical_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.trim_end_matches(&['\r', '\n'][..]).to_string())
            .collect()
    }
}

/// Rendered output split into lines.
///
/// One trailing terminator is dropped first (`\r\n`, `\n` or `\r`), then the
/// remaining `\r\n` and `\r` are folded into `\n`. Empty output has no lines.
pub fn canonical_output_lines(output: &str) -> Vec<String> {
    if output.is_empty() {
        return Vec::new();
    }
    let body = output
        .strip_suffix("\r\n")
        .or_else(|| output.strip_suffix('\n'))
        .or_else(|| output.strip_suffix('\r'))
        .unwrap_or(output);
    body.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// A line that differs between golden and generated output
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineMismatch {
    /// Zero-based line index
    pub index: usize,
    pub expected: String,
    pub actual: String,
}

impl LineMismatch {
    /// One-based line number for display
    pub fn line_number(&self) -> usize {
        self.index + 1
    }
}

/// Result of comparing generated output with the golden file
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OutputComparison {
    /// Generated output size in bytes
    pub actual_bytes: usize,
    /// Golden file size in bytes
    pub golden_bytes: usize,
    /// Lines compared in lock-step
    pub checked: usize,
    /// Golden line count
    pub expected_lines: usize,
    /// Generated line count
    pub generated_lines: usize,
    pub mismatches: Vec<LineMismatch>,
    /// Generated lines left over once the golden file ran out
    pub actual_remaining: usize,
    /// Golden lines left over once the generated output ran out
    pub golden_remaining: usize,
    #[serde(skip)]
    expected: Vec<String>,
    #[serde(skip)]
    generated: Vec<String>,
}

impl OutputComparison {
    /// Lines match one to one
    pub fn is_match(&self) -> bool {
        self.mismatches.is_empty() && self.actual_remaining == 0 && self.golden_remaining == 0
    }

    /// Informational only, never part of the verdict
    pub fn same_size(&self) -> bool {
        self.actual_bytes == self.golden_bytes
    }

    /// Unified diff of canonical golden vs generated lines, `None` on match
    pub fn unified_diff(&self) -> Option<String> {
        if self.is_match() {
            return None;
        }
        let expected = join_lines(&self.expected);
        let generated = join_lines(&self.generated);
        let diff = TextDiff::from_lines(expected.as_str(), generated.as_str())
            .unified_diff()
            .context_radius(3)
            .header("expected", "generated")
            .to_string();
        Some(diff)
    }
}

fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Compare generated output with the golden file line by line.
///
/// Every differing line is recorded; comparison only stops when one side
/// runs out of lines.
pub fn compare_output(actual: &str, golden: &GoldenOutput) -> OutputComparison {
    let generated = canonical_output_lines(actual);
    let expected = golden.canonical_lines();

    let mut mismatches = Vec::new();
    let mut checked = 0;
    let mut actual_remaining = 0;
    for (index, line) in generated.iter().enumerate() {
        let Some(expected_line) = expected.get(index) else {
            actual_remaining = generated.len() - index;
            break;
        };
        checked += 1;
        if line != expected_line {
            mismatches.push(LineMismatch {
                index,
                expected: expected_line.clone(),
                actual: line.clone(),
            });
        }
    }
    let golden_remaining = expected.len() - checked;

    OutputComparison {
        actual_bytes: actual.len(),
        golden_bytes: golden.byte_len(),
        checked,
        expected_lines: expected.len(),
        generated_lines: generated.len(),
        mismatches,
        actual_remaining,
        golden_remaining,
        expected,
        generated,
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
