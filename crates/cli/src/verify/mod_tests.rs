// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::render::DiagnosticEntry;
use tengcheck_fixture::Position;
use yare::parameterized;

fn entry(filename: &str, line: u32, column: u32) -> DiagnosticEntry {
    DiagnosticEntry {
        line,
        column,
        level: 2,
        filename: filename.to_string(),
        message: String::new(),
    }
}

fn result(status: i32, output: &str, error_log: Vec<DiagnosticEntry>) -> RenderResult {
    RenderResult {
        status,
        output: output.to_string(),
        error_log,
    }
}

fn golden(text: &str) -> GoldenOutput {
    GoldenOutput::from_bytes(text.as_bytes())
}

#[test]
fn test_clean_render_succeeds() {
    let verdict = verify(
        DiagnosticIndex::new(),
        &result(0, "line1\nline2\n", vec![]),
        &golden("line1\nline2\n"),
    );
    assert!(verdict.success);
    assert!(!verdict.fatal);
    assert!(verdict.output.as_ref().unwrap().is_match());
    assert_eq!(verdict.status_exit_code(), 0);
}

#[test]
fn test_expected_diagnostics_with_output_succeeds() {
    let mut index = DiagnosticIndex::new();
    index.declare("page.tpl", Position::new(4, 7));

    let verdict = verify(
        index,
        &result(1, "ok\n", vec![entry("dir/page.tpl", 4, 7)]),
        &golden("ok\n"),
    );

    assert!(verdict.success);
    assert!(!verdict.fatal);
    assert_eq!(verdict.diagnostics.tally.matched, 1);
}

#[test]
fn test_fatal_skips_comparison() {
    let mut index = DiagnosticIndex::new();
    index.declare("page.tpl", Position::new(1, 1));

    let verdict = verify(
        index,
        &result(2, "", vec![entry("page.tpl", 1, 1)]),
        &golden("anything\n"),
    );

    assert!(verdict.fatal);
    assert!(!verdict.success);
    assert_eq!(verdict.output, None);
    // Diagnostics are still reconciled
    assert_eq!(verdict.diagnostics.tally.matched, 1);
}

#[test]
fn test_unexpected_diagnostic_fails() {
    let verdict = verify(
        DiagnosticIndex::new(),
        &result(0, "ok\n", vec![entry("page.tpl", 9, 9)]),
        &golden("ok\n"),
    );
    assert!(!verdict.success);
    assert!(verdict.output.unwrap().is_match());
}

#[test]
fn test_missing_diagnostic_fails() {
    let mut index = DiagnosticIndex::new();
    index.declare("page.tpl", Position::new(2, 3));

    let verdict = verify(index, &result(0, "ok\n", vec![]), &golden("ok\n"));
    assert!(!verdict.success);
    assert_eq!(verdict.diagnostics.tally.missing_expected, 1);
}

#[test]
fn test_output_mismatch_fails() {
    let verdict = verify(
        DiagnosticIndex::new(),
        &result(0, "line1\nlineX\n", vec![]),
        &golden("line1\nline2\n"),
    );
    assert!(!verdict.success);
    assert_eq!(verdict.output.unwrap().mismatches.len(), 1);
}

#[test]
fn test_empty_output_zero_status_is_not_fatal() {
    let verdict = verify(DiagnosticIndex::new(), &result(0, "", vec![]), &golden(""));
    assert!(!verdict.fatal);
    assert!(verdict.success);
}

#[parameterized(
    zero = { 0, 0 },
    one = { 1, 255 },
    two = { 2, 254 },
    negative = { -3, 3 },
    wraps = { 256, 0 },
)]
fn status_exit_code(status: i32, expected: i32) {
    let verdict = verify(
        DiagnosticIndex::new(),
        &result(status, "x\n", vec![]),
        &golden("x\n"),
    );
    assert_eq!(verdict.status_exit_code(), expected);
}

#[test]
fn test_verdict_serializes() {
    let verdict = verify(
        DiagnosticIndex::new(),
        &result(0, "a\n", vec![entry("p.tpl", 1, 2)]),
        &golden("a\n"),
    );
    let json = serde_json::to_value(&verdict).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["diagnostics"]["tally"]["unexpected"], 1);
    assert_eq!(
        json["diagnostics"]["diagnostics"][0]["classification"],
        "unexpected"
    );
    assert_eq!(json["output"]["checked"], 1);
}
