// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture construction errors.

use crate::diagnostics::Position;
use crate::path::FixturePath;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What went wrong while building a fixture
#[derive(Debug, Error)]
pub enum FixtureErrorKind {
    #[error("Failed to read fixture '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fixture document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("No \"{0}\" root element found")]
    MissingRoot(String),

    #[error("Dictionary already has an attribute called \"{name}\"")]
    DuplicateName { name: String },

    #[error("Invalid integer {text:?}: {reason}")]
    InvalidInteger { text: String, reason: String },

    #[error("Invalid float {text:?}: {reason}")]
    InvalidFloat { text: String, reason: String },

    #[error("Tag \"binary\" lacks required attribute \"file\"")]
    MissingFileAttribute,

    #[error("File '{file}' does not exist or is not regular")]
    BinaryNotFound { file: String },

    #[error("Failed to read binary file '{file}': {source}")]
    BinaryRead {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unrecognized tag \"{tag}\"")]
    UnrecognizedTag { tag: String },

    #[error("Tag \"{tag}\" lacks required attribute \"name\"")]
    MissingName { tag: String },

    #[error("Error declarations are only allowed directly under the root element")]
    MisplacedErrors,

    #[error("Invalid tag \"{tag}\" in fragment list, expected \"frag\"")]
    InvalidFragment { tag: String },

    #[error("Tag \"{tag}\" lacks one or more required attributes (line, column)")]
    MissingPosition { tag: String },

    #[error("Invalid {attribute} value {value:?}: {reason}")]
    InvalidPosition {
        attribute: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid tag \"{tag}\" in error declarations, expected \"error\"")]
    UnrecognizedErrorTag { tag: String },

    #[error("Error at {position} is already declared for file {file}")]
    DuplicateDiagnostic { file: String, position: Position },
}

/// A fixture error together with the location it was raised at
#[derive(Debug)]
pub struct FixtureError {
    kind: FixtureErrorKind,
    path: FixturePath,
}

impl FixtureError {
    pub fn new(kind: FixtureErrorKind, path: FixturePath) -> Self {
        Self { kind, path }
    }

    /// Error raised before any tree node was entered
    pub fn document(kind: FixtureErrorKind) -> Self {
        Self::new(kind, FixturePath::root())
    }

    pub fn kind(&self) -> &FixtureErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &FixturePath {
        &self.path
    }

    /// True when the document itself could not be read or parsed
    pub fn is_document_error(&self) -> bool {
        matches!(
            self.kind,
            FixtureErrorKind::Read { .. } | FixtureErrorKind::Xml(_)
        )
    }

    pub fn is_missing_root(&self) -> bool {
        matches!(self.kind, FixtureErrorKind::MissingRoot(_))
    }
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} in {}", self.kind, self.path)
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}
