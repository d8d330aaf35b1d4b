// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture document parsing.
//!
//! A fixture looks like:
//! ```xml
//! <tengData lang="en" dict="messages.dict">
//!   <string name="title">Hello</string>
//!   <number name="count">3</number>
//!   <frags name="rows">
//!     <frag><string name="label">first</string></frag>
//!   </frags>
//!   <errors file="page.html">
//!     <error line="4" column="12"/>
//!   </errors>
//! </tengData>
//! ```

use crate::diagnostics::{DiagnosticIndex, Position};
use crate::error::{FixtureError, FixtureErrorKind};
use crate::path::FixturePath;
use crate::value::{Binary, FixtureDict, FixtureValue};
use roxmltree::{Document, Node};
use std::path::Path;

/// Root element tag of fixture documents
pub const DEFAULT_ROOT_TAG: &str = "tengData";

/// Render settings carried as attributes of the root element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixtureAttributes {
    /// `lang`
    pub language: Option<String>,
    /// `dict`
    pub dictionary: Option<String>,
    /// `conf`
    pub config: Option<String>,
    /// `def`
    pub data_definition: Option<String>,
}

/// A fully built fixture
#[derive(Clone, Debug, PartialEq)]
pub struct Fixture {
    pub data: FixtureDict,
    pub diagnostics: DiagnosticIndex,
    pub attributes: FixtureAttributes,
}

impl Fixture {
    /// Parse fixture text with the default root tag
    pub fn parse(text: &str) -> Result<Self, FixtureError> {
        FixtureBuilder::new().parse(text)
    }

    /// Load a fixture file with the default root tag
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        FixtureBuilder::new().load(path)
    }
}

/// Builds [`Fixture`]s from XML documents
#[derive(Clone, Debug)]
pub struct FixtureBuilder {
    root_tag: String,
}

impl Default for FixtureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self {
            root_tag: DEFAULT_ROOT_TAG.to_string(),
        }
    }

    /// Expect a different root element tag
    pub fn with_root_tag(mut self, root_tag: impl Into<String>) -> Self {
        self.root_tag = root_tag.into();
        self
    }

    /// Read and parse a fixture file
    pub fn load(&self, path: &Path) -> Result<Fixture, FixtureError> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            FixtureError::document(FixtureErrorKind::Read {
                path: path.to_path_buf(),
                source,
            })
        })?;
        self.parse(&text)
    }

    /// Parse fixture text
    pub fn parse(&self, text: &str) -> Result<Fixture, FixtureError> {
        let doc = Document::parse(text)
            .map_err(|e| FixtureError::document(FixtureErrorKind::Xml(e)))?;
        let root = doc.root_element();
        if root.tag_name().name() != self.root_tag {
            return Err(FixtureError::document(FixtureErrorKind::MissingRoot(
                self.root_tag.clone(),
            )));
        }

        let mut diagnostics = DiagnosticIndex::new();
        let data = parse_dict(root, &FixturePath::root(), Some(&mut diagnostics))?;
        let attributes = FixtureAttributes {
            language: non_empty_attribute(root, "lang").map(str::to_string),
            dictionary: non_empty_attribute(root, "dict").map(str::to_string),
            config: non_empty_attribute(root, "conf").map(str::to_string),
            data_definition: non_empty_attribute(root, "def").map(str::to_string),
        };

        Ok(Fixture {
            data,
            diagnostics,
            attributes,
        })
    }
}

/// Build the dict formed by the child elements of `node`.
///
/// `diagnostics` is only present at the root, the one scope where `errors`
/// declarations are allowed.
fn parse_dict(
    node: Node<'_, '_>,
    path: &FixturePath,
    mut diagnostics: Option<&mut DiagnosticIndex>,
) -> Result<FixtureDict, FixtureError> {
    let mut dict = FixtureDict::new();

    for child in node.children().filter(Node::is_element) {
        let tag = child.tag_name().name();

        if let Some(name) = non_empty_attribute(child, "name") {
            let child_path = path.child(name);
            if dict.contains_key(name) {
                return Err(FixtureError::new(
                    FixtureErrorKind::DuplicateName {
                        name: name.to_string(),
                    },
                    child_path,
                ));
            }
            let value = parse_value(child, tag, &child_path)?;
            dict.insert(name.to_string(), value);
        } else if let Some(file) = non_empty_attribute(child, "file") {
            let child_path = path.unnamed(tag);
            if tag != "errors" {
                return Err(FixtureError::new(
                    FixtureErrorKind::UnrecognizedTag {
                        tag: tag.to_string(),
                    },
                    child_path,
                ));
            }
            let Some(index) = diagnostics.as_deref_mut() else {
                return Err(FixtureError::new(
                    FixtureErrorKind::MisplacedErrors,
                    child_path,
                ));
            };
            parse_errors(child, file, index, &child_path)?;
        } else {
            return Err(FixtureError::new(
                FixtureErrorKind::MissingName {
                    tag: tag.to_string(),
                },
                path.unnamed(tag),
            ));
        }
    }

    Ok(dict)
}

fn parse_value(
    node: Node<'_, '_>,
    tag: &str,
    path: &FixturePath,
) -> Result<FixtureValue, FixtureError> {
    let fail = |kind: FixtureErrorKind| FixtureError::new(kind, path.clone());

    match tag {
        "string" => Ok(FixtureValue::String(text_content(node))),
        "number" => {
            let text = text_content(node);
            match text.trim().parse::<i64>() {
                Ok(n) => Ok(FixtureValue::Integer(n)),
                Err(e) => Err(fail(FixtureErrorKind::InvalidInteger {
                    reason: e.to_string(),
                    text,
                })),
            }
        }
        "float" => {
            let text = text_content(node);
            match text.trim().parse::<f64>() {
                Ok(f) => Ok(FixtureValue::Float(f)),
                Err(e) => Err(fail(FixtureErrorKind::InvalidFloat {
                    reason: e.to_string(),
                    text,
                })),
            }
        }
        "binary" => {
            let file = non_empty_attribute(node, "file")
                .ok_or_else(|| fail(FixtureErrorKind::MissingFileAttribute))?;
            read_binary(file).map_err(fail)
        }
        "dict" => parse_dict(node, path, None).map(FixtureValue::Dict),
        "frags" => parse_frags(node, path).map(FixtureValue::FragmentList),
        other => Err(fail(FixtureErrorKind::UnrecognizedTag {
            tag: other.to_string(),
        })),
    }
}

fn parse_frags(node: Node<'_, '_>, path: &FixturePath) -> Result<Vec<FixtureDict>, FixtureError> {
    let mut frags = Vec::new();
    for child in node.children().filter(Node::is_element) {
        let tag = child.tag_name().name();
        let frag_path = path.fragment(frags.len());
        if tag != "frag" {
            return Err(FixtureError::new(
                FixtureErrorKind::InvalidFragment {
                    tag: tag.to_string(),
                },
                frag_path,
            ));
        }
        frags.push(parse_dict(child, &frag_path, None)?);
    }
    Ok(frags)
}

fn parse_errors(
    node: Node<'_, '_>,
    file: &str,
    index: &mut DiagnosticIndex,
    path: &FixturePath,
) -> Result<(), FixtureError> {
    for child in node.children().filter(Node::is_element) {
        let tag = child.tag_name().name();
        let fail = |kind: FixtureErrorKind| FixtureError::new(kind, path.clone());

        let (Some(line), Some(column)) = (
            non_empty_attribute(child, "line"),
            non_empty_attribute(child, "column"),
        ) else {
            return Err(fail(FixtureErrorKind::MissingPosition {
                tag: tag.to_string(),
            }));
        };
        if tag != "error" {
            return Err(fail(FixtureErrorKind::UnrecognizedErrorTag {
                tag: tag.to_string(),
            }));
        }

        let position = Position::new(
            parse_coordinate("line", line).map_err(fail)?,
            parse_coordinate("column", column).map_err(fail)?,
        );
        if !index.declare(file, position) {
            return Err(fail(FixtureErrorKind::DuplicateDiagnostic {
                file: file.to_string(),
                position,
            }));
        }
    }
    Ok(())
}

fn parse_coordinate(attribute: &'static str, value: &str) -> Result<u32, FixtureErrorKind> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| FixtureErrorKind::InvalidPosition {
            attribute,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn read_binary(file: &str) -> Result<FixtureValue, FixtureErrorKind> {
    let path = Path::new(file);
    if !path.is_file() {
        return Err(FixtureErrorKind::BinaryNotFound {
            file: file.to_string(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| FixtureErrorKind::BinaryRead {
        file: file.to_string(),
        source,
    })?;
    Ok(FixtureValue::Binary(Binary::new(bytes)))
}

/// Text and CDATA children of `node`, concatenated in document order
fn text_content(node: Node<'_, '_>) -> String {
    node.children()
        .filter(Node::is_text)
        .filter_map(|child| child.text())
        .collect()
}

/// Attribute value, treating an empty value as absent
fn non_empty_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name).filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
