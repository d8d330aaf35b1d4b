// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Location of a node inside the fixture tree, used in error messages.

use std::fmt;

/// Chain of enclosing names from the fixture root down to a node.
///
/// Named values contribute their name, unnamed elements `{tag}` and
/// fragments `[index]`. Displayed slash-joined, or `<root>` when empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixturePath {
    segments: Vec<String>,
}

impl FixturePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a named child
    pub fn child(&self, name: &str) -> Self {
        self.push(name.to_string())
    }

    /// Path of an element that has no name
    pub fn unnamed(&self, tag: &str) -> Self {
        self.push(format!("{{{tag}}}"))
    }

    /// Path of the `index`-th fragment of a fragment list
    pub fn fragment(&self, index: usize) -> Self {
        self.push(format!("[{index}]"))
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    fn push(&self, segment: String) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for FixturePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "<root>")
        } else {
            write!(f, "{}", self.segments.join("/"))
        }
    }
}
