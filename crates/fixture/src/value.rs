// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed fixture values.

use serde::Serialize;
use std::collections::BTreeMap;

/// Named values of one dict scope. Names are unique within a scope.
pub type FixtureDict = BTreeMap<String, FixtureValue>;

/// A single value of the fixture data tree
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FixtureValue {
    String(String),
    Integer(i64),
    Float(f64),
    Binary(Binary),
    Dict(FixtureDict),
    FragmentList(Vec<FixtureDict>),
}

/// Raw bytes loaded verbatim from a referenced file.
///
/// Serialized as `{"$binary": "<hex>"}` so the render collaborator can tell
/// it apart from a plain string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Binary {
    #[serde(rename = "$binary", serialize_with = "crate::hex_serde::serialize")]
    bytes: Vec<u8>,
}

impl Binary {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl FixtureValue {
    /// Name of the fixture tag that produces this kind of value
    pub fn kind(&self) -> &'static str {
        match self {
            FixtureValue::String(_) => "string",
            FixtureValue::Integer(_) => "number",
            FixtureValue::Float(_) => "float",
            FixtureValue::Binary(_) => "binary",
            FixtureValue::Dict(_) => "dict",
            FixtureValue::FragmentList(_) => "frags",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FixtureValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FixtureValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            FixtureValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FixtureValue::Binary(b) => Some(b.as_bytes()),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&FixtureDict> {
        match self {
            FixtureValue::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_fragments(&self) -> Option<&[FixtureDict]> {
        match self {
            FixtureValue::FragmentList(frags) => Some(frags),
            _ => None,
        }
    }

    /// Count of values in this subtree, this value included
    pub fn node_count(&self) -> usize {
        match self {
            FixtureValue::String(_)
            | FixtureValue::Integer(_)
            | FixtureValue::Float(_)
            | FixtureValue::Binary(_) => 1,
            FixtureValue::Dict(dict) => 1 + dict_node_count(dict),
            FixtureValue::FragmentList(frags) => {
                1 + frags.iter().map(|f| 1 + dict_node_count(f)).sum::<usize>()
            }
        }
    }
}

fn dict_node_count(dict: &FixtureDict) -> usize {
    dict.values().map(FixtureValue::node_count).sum()
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
