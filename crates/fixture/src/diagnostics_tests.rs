// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use yare::parameterized;

#[parameterized(
    bare = { "page.html", "page.html" },
    unix = { "/srv/templates/page.html", "page.html" },
    relative = { "templates/inc/header.html", "header.html" },
    windows = { "C:\\templates\\page.html", "page.html" },
    trailing_slash = { "templates/", "" },
)]
fn basename_cases(input: &str, expected: &str) {
    assert_eq!(basename(input), expected);
}

#[test]
fn test_position_displays_as_key() {
    assert_eq!(Position::new(10, 2).to_string(), "10:2");
}

#[test]
fn test_declare_keys_by_basename() {
    let mut index = DiagnosticIndex::new();
    assert!(index.declare("tests/f.tpl", Position::new(10, 2)));

    assert_eq!(index.is_matched("f.tpl", Position::new(10, 2)), Some(false));
    assert_eq!(index.files().collect::<Vec<_>>(), vec!["f.tpl"]);
    assert_eq!(index.expected_count(), 1);
}

#[test]
fn test_duplicate_declaration_rejected() {
    let mut index = DiagnosticIndex::new();
    assert!(index.declare("f.tpl", Position::new(1, 1)));
    assert!(!index.declare("other/f.tpl", Position::new(1, 1)));
    assert_eq!(index.expected_count(), 1);
}

#[test]
fn test_mark_outcomes() {
    let mut index = DiagnosticIndex::new();
    index.declare("f.tpl", Position::new(10, 2));

    assert_eq!(
        index.mark("/abs/f.tpl", Position::new(10, 2)),
        MarkOutcome::Matched
    );
    assert_eq!(
        index.mark("f.tpl", Position::new(10, 2)),
        MarkOutcome::AlreadyMatched
    );
    assert_eq!(
        index.mark("f.tpl", Position::new(10, 3)),
        MarkOutcome::Undeclared
    );
    assert_eq!(
        index.mark("g.tpl", Position::new(10, 2)),
        MarkOutcome::Undeclared
    );
    assert_eq!(index.matched_count(), 1);
}

#[test]
fn test_unmatched_is_ordered_and_shrinks() {
    let mut index = DiagnosticIndex::new();
    index.declare("b.tpl", Position::new(5, 9));
    index.declare("a.tpl", Position::new(3, 1));
    index.declare("a.tpl", Position::new(2, 7));

    let unmatched: Vec<_> = index.unmatched().collect();
    assert_eq!(
        unmatched,
        vec![
            ("a.tpl", Position::new(2, 7)),
            ("a.tpl", Position::new(3, 1)),
            ("b.tpl", Position::new(5, 9)),
        ]
    );

    index.mark("a.tpl", Position::new(3, 1));
    assert_eq!(index.unmatched().count(), 2);
    // Declarations are counted regardless of match state
    assert_eq!(index.expected_count(), 3);
}

#[test]
fn test_empty_index() {
    let index = DiagnosticIndex::new();
    assert!(index.is_empty());
    assert_eq!(index.entries().count(), 0);
}
