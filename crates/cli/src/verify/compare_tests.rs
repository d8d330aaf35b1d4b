// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;
use std::io::Write;
use tempfile::NamedTempFile;

fn golden(text: &str) -> GoldenOutput {
    GoldenOutput::from_bytes(text.as_bytes())
}

#[test]
fn test_golden_lines_keep_terminators() {
    let g = golden("line1\r\nline2\nlast");
    assert_eq!(g.raw_lines(), &["line1\r\n", "line2\n", "last"]);
    assert_eq!(g.canonical_lines(), vec!["line1", "line2", "last"]);
    assert_eq!(g.byte_len(), 17);
}

#[test]
fn test_empty_golden_has_no_lines() {
    assert!(golden("").raw_lines().is_empty());
}

#[rstest]
#[case::lf("a\nb\n", &["a", "b"])]
#[case::crlf("a\r\nb\r\n", &["a", "b"])]
#[case::cr("a\rb\r", &["a", "b"])]
#[case::no_terminator("a\nb", &["a", "b"])]
#[case::only_one_stripped("a\n\n", &["a", ""])]
#[case::crlf_then_lf("a\r\n\n", &["a", ""])]
#[case::single_newline("\n", &[""])]
#[case::empty("", &[])]
fn output_canonicalization(#[case] output: &str, #[case] expected: &[&str]) {
    assert_eq!(canonical_output_lines(output), expected);
}

#[test]
fn test_identical_output_matches() {
    let result = compare_output("line1\nline2\n", &golden("line1\nline2\n"));
    assert!(result.is_match());
    assert!(result.mismatches.is_empty());
    assert_eq!(result.checked, 2);
    assert!(result.same_size());
    assert_eq!(result.unified_diff(), None);
}

#[test]
fn test_line_endings_are_canonical() {
    let result = compare_output("line1\r\nline2\r\n", &golden("line1\nline2\n"));
    assert!(result.is_match());
    // Sizes differ, which is only informational
    assert!(!result.same_size());
}

#[test]
fn test_single_mismatch() {
    let result = compare_output("line1\nlineX\n", &golden("line1\nline2\n"));

    assert!(!result.is_match());
    assert_eq!(
        result.mismatches,
        vec![LineMismatch {
            index: 1,
            expected: "line2".to_string(),
            actual: "lineX".to_string(),
        }]
    );
    assert_eq!(result.mismatches[0].line_number(), 2);
}

#[test]
fn test_all_mismatches_reported() {
    let result = compare_output("x\nb\ny\n", &golden("a\nb\nc\n"));
    let indexes: Vec<usize> = result.mismatches.iter().map(|m| m.index).collect();
    assert_eq!(indexes, vec![0, 2]);
    assert_eq!(result.checked, 3);
}

#[test]
fn test_generated_longer_than_golden() {
    let result = compare_output("a\nb\nc\n", &golden("a\nb\n"));
    assert_eq!(result.actual_remaining, 1);
    assert_eq!(result.golden_remaining, 0);
    assert_eq!(result.checked, 2);
    assert_eq!(result.generated_lines, 3);
    assert_eq!(result.expected_lines, 2);
    assert!(!result.is_match());
}

#[test]
fn test_golden_longer_than_generated() {
    let result = compare_output("a\n", &golden("a\nb\nc\n"));
    assert_eq!(result.actual_remaining, 0);
    assert_eq!(result.golden_remaining, 2);
    assert!(!result.is_match());
}

#[test]
fn test_empty_output_against_empty_golden() {
    let result = compare_output("", &golden(""));
    assert!(result.is_match());
    assert_eq!(result.checked, 0);
}

#[test]
fn test_unified_diff_shows_change() {
    let result = compare_output("line1\nlineX\n", &golden("line1\nline2\n"));
    let diff = result.unified_diff().unwrap();
    assert!(diff.contains("--- expected"));
    assert!(diff.contains("+++ generated"));
    assert!(diff.contains("-line2"));
    assert!(diff.contains("+lineX"));
}

#[test]
fn test_load_golden_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"<p>Hello</p>\r\n").unwrap();
    file.flush().unwrap();

    let g = GoldenOutput::load(file.path()).unwrap();
    assert_eq!(g.canonical_lines(), vec!["<p>Hello</p>"]);
    assert_eq!(g.byte_len(), 14);
}
