// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use serde_json::json;

fn sample_dict() -> FixtureDict {
    let mut row = FixtureDict::new();
    row.insert("label".to_string(), FixtureValue::String("first".to_string()));

    let mut dict = FixtureDict::new();
    dict.insert("title".to_string(), FixtureValue::String("Hello".to_string()));
    dict.insert("count".to_string(), FixtureValue::Integer(3));
    dict.insert("ratio".to_string(), FixtureValue::Float(0.5));
    dict.insert(
        "blob".to_string(),
        FixtureValue::Binary(Binary::new(vec![0xde, 0xad, 0x00])),
    );
    dict.insert("rows".to_string(), FixtureValue::FragmentList(vec![row]));
    dict
}

#[test]
fn test_kind_names_match_tags() {
    assert_eq!(FixtureValue::String(String::new()).kind(), "string");
    assert_eq!(FixtureValue::Integer(0).kind(), "number");
    assert_eq!(FixtureValue::Float(0.0).kind(), "float");
    assert_eq!(FixtureValue::Binary(Binary::default()).kind(), "binary");
    assert_eq!(FixtureValue::Dict(FixtureDict::new()).kind(), "dict");
    assert_eq!(FixtureValue::FragmentList(vec![]).kind(), "frags");
}

#[test]
fn test_accessors_only_match_their_variant() {
    let value = FixtureValue::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert_eq!(value.as_str(), None);
    assert_eq!(value.as_float(), None);
    assert!(value.as_dict().is_none());
    assert!(value.as_fragments().is_none());
    assert!(value.as_bytes().is_none());
}

#[test]
fn test_serializes_to_plain_json() {
    let value = FixtureValue::Dict(sample_dict());
    let json = serde_json::to_value(&value).unwrap();

    assert_eq!(
        json,
        json!({
            "blob": { "$binary": "dead00" },
            "count": 3,
            "ratio": 0.5,
            "rows": [ { "label": "first" } ],
            "title": "Hello",
        })
    );
}

#[test]
fn test_node_count_includes_nested_values() {
    let value = FixtureValue::Dict(sample_dict());
    // dict + 5 members + 1 fragment + 1 fragment member
    assert_eq!(value.node_count(), 8);
}

#[test]
fn test_binary_accessors() {
    let binary = Binary::new(b"abc".to_vec());
    assert_eq!(binary.len(), 3);
    assert!(!binary.is_empty());
    assert_eq!(FixtureValue::Binary(binary).as_bytes(), Some(&b"abc"[..]));
}
