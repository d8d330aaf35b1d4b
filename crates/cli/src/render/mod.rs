// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Render collaborator protocol.
//!
//! The template engine is not linked into tengcheck. A renderer receives the
//! fixture data and render settings as a [`RenderRequest`] and answers with a
//! [`RenderResult`]: status code, generated output and the diagnostic log.

pub mod command;

pub use command::CommandRenderer;

use crate::config::RenderConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tengcheck_fixture::{Fixture, FixtureDict, Position};
use thiserror::Error;

/// One diagnostic reported by the engine
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    pub line: u32,
    pub column: u32,
    /// Engine severity: 0 debug, 1 warning, 2 error, 3 fatal
    #[serde(default)]
    pub level: u8,
    pub filename: String,
    #[serde(default)]
    pub message: String,
}

impl DiagnosticEntry {
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn level_name(&self) -> &'static str {
        match self.level {
            0 => "debug",
            1 => "warning",
            2 => "error",
            3 => "fatal",
            _ => "unknown",
        }
    }
}

/// Request handed to the render collaborator
#[derive(Clone, Debug, Serialize)]
pub struct RenderRequest<'a> {
    pub template: &'a Path,
    pub data: &'a FixtureDict,
    pub language: Option<&'a str>,
    pub dictionary: Option<&'a str>,
    pub config: Option<&'a str>,
    pub data_definition: Option<&'a str>,
    pub content_type: &'a str,
    pub encoding: &'a str,
    pub error_fragment: bool,
    pub validate: bool,
}

impl<'a> RenderRequest<'a> {
    pub fn new(template: &'a Path, fixture: &'a Fixture, settings: &'a RenderConfig) -> Self {
        let attributes = &fixture.attributes;
        Self {
            template,
            data: &fixture.data,
            language: attributes.language.as_deref(),
            dictionary: attributes.dictionary.as_deref(),
            config: attributes.config.as_deref(),
            data_definition: attributes.data_definition.as_deref(),
            content_type: &settings.content_type,
            encoding: &settings.encoding,
            error_fragment: settings.error_fragment,
            validate: settings.validate,
        }
    }
}

/// What the render produced
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    pub status: i32,
    #[serde(default)]
    pub output: String,
    #[serde(default, alias = "errorLog")]
    pub error_log: Vec<DiagnosticEntry>,
}

impl RenderResult {
    /// Generation was terminated: non-zero status and nothing rendered
    pub fn is_fatal(&self) -> bool {
        self.status != 0 && self.output.is_empty()
    }
}

/// A render collaborator
#[allow(async_fn_in_trait)]
pub trait Renderer {
    async fn render(&self, request: &RenderRequest<'_>) -> Result<RenderResult, RenderError>;
}

/// Failures talking to the render collaborator.
///
/// A non-zero render status is not an error here, it is part of the result.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize render request: {0}")]
    Serialization(String),

    #[error("Failed to spawn renderer '{command}': {message}")]
    Spawn { command: String, message: String },

    #[error("Renderer I/O error: {0}")]
    Io(String),

    #[error("Renderer timed out after {0}ms")]
    Timeout(u64),

    #[error("Renderer exited with non-zero status (code: {code:?}): {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },

    #[error("Invalid renderer response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
