// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use serde_json::json;
use std::path::PathBuf;
use yare::parameterized;

#[test]
fn test_result_accepts_engine_field_names() {
    let result: RenderResult = serde_json::from_value(json!({
        "status": -1,
        "output": "<p>hi</p>",
        "errorLog": [
            { "level": 2, "filename": "/t/page.html", "line": 4, "column": 12, "message": "Unknown variable" }
        ]
    }))
    .unwrap();

    assert_eq!(result.status, -1);
    assert_eq!(result.error_log.len(), 1);
    assert_eq!(result.error_log[0].position(), Position::new(4, 12));
    assert_eq!(result.error_log[0].level_name(), "error");
}

#[test]
fn test_result_defaults() {
    let result: RenderResult = serde_json::from_value(json!({ "status": 0 })).unwrap();
    assert_eq!(result.output, "");
    assert!(result.error_log.is_empty());
    assert!(!result.is_fatal());
}

#[parameterized(
    ok_empty = { 0, "", false },
    ok_output = { 0, "x", false },
    failed_with_output = { -1, "x", false },
    failed_empty = { -1, "", true },
    positive_empty = { 3, "", true },
)]
fn fatal_detection(status: i32, output: &str, fatal: bool) {
    let result = RenderResult {
        status,
        output: output.to_string(),
        error_log: vec![],
    };
    assert_eq!(result.is_fatal(), fatal);
}

#[parameterized(
    debug = { 0, "debug" },
    warning = { 1, "warning" },
    error = { 2, "error" },
    fatal = { 3, "fatal" },
    other = { 9, "unknown" },
)]
fn level_names(level: u8, name: &str) {
    let entry = DiagnosticEntry {
        line: 1,
        column: 1,
        level,
        filename: "a".to_string(),
        message: String::new(),
    };
    assert_eq!(entry.level_name(), name);
}

#[test]
fn test_request_carries_fixture_attributes() {
    let fixture = Fixture::parse(
        r#"<tengData lang="en" dict="d.dict"><number name="n">1</number></tengData>"#,
    )
    .unwrap();
    let settings = RenderConfig::default();
    let template = PathBuf::from("page.html");

    let request = RenderRequest::new(&template, &fixture, &settings);
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
        json,
        json!({
            "template": "page.html",
            "data": { "n": 1 },
            "language": "en",
            "dictionary": "d.dict",
            "config": null,
            "data_definition": null,
            "content_type": "text/html",
            "encoding": "utf-8",
            "error_fragment": true,
            "validate": true,
        })
    );
}
