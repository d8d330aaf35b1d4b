// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check configuration loaded from TOML.
//!
//! ```toml
//! [fixture]
//! root_tag = "tengData"
//!
//! [render]
//! command = "teng-render"
//! args = ["--skin", "default"]
//! timeout_ms = 30000
//! content_type = "text/html"
//! encoding = "utf-8"
//! error_fragment = true
//! validate = true
//! ```
//!
//! Values are layered: command-line flag, then environment variable, then
//! config file, then the defaults below.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tengcheck_fixture::DEFAULT_ROOT_TAG;
use thiserror::Error;

/// Default render timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Default content type the engine renders for
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";
/// Default output encoding
pub const DEFAULT_ENCODING: &str = "utf-8";

fn default_root_tag() -> String {
    DEFAULT_ROOT_TAG.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

fn default_encoding() -> String {
    DEFAULT_ENCODING.to_string()
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level check configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    #[serde(default)]
    pub fixture: FixtureConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// How fixture documents are read
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FixtureConfig {
    /// Root element tag (default: "tengData")
    #[serde(default = "default_root_tag")]
    pub root_tag: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            root_tag: default_root_tag(),
        }
    }
}

/// How the render collaborator is invoked
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Executable receiving the render request on stdin
    #[serde(default)]
    pub command: Option<String>,

    /// Extra arguments passed to the command
    #[serde(default)]
    pub args: Vec<String>,

    /// Timeout in milliseconds (default: 30000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Content type the engine escapes for (default: "text/html")
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Output encoding (default: "utf-8")
    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// Expose the error log to templates as a fragment (default: true)
    #[serde(default = "default_true")]
    pub error_fragment: bool,

    /// Validate data against the data definition (default: true)
    #[serde(default = "default_true")]
    pub validate: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            timeout_ms: default_timeout_ms(),
            content_type: default_content_type(),
            encoding: default_encoding(),
            error_fragment: true,
            validate: true,
        }
    }
}

/// Values that take precedence over the config file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub render_command: Option<String>,
    pub render_args: Vec<String>,
    pub timeout_ms: Option<u64>,
    pub root_tag: Option<String>,
}

impl ConfigOverrides {
    /// Overrides read from `TENGCHECK_*` environment variables
    pub fn from_env() -> Self {
        Self {
            render_command: crate::env::render_command(),
            render_args: Vec::new(),
            timeout_ms: crate::env::render_timeout_ms(),
            root_tag: crate::env::root_tag(),
        }
    }
}

impl CheckConfig {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CheckConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Build the effective config: optional file, then environment, then flags
    pub fn resolve(file: Option<&Path>, flags: ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(ConfigOverrides::from_env());
        config.apply(flags);
        config.validate()?;
        Ok(config)
    }

    /// Layer overrides on top of this config
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(command) = overrides.render_command {
            self.render.command = Some(command);
        }
        if !overrides.render_args.is_empty() {
            self.render.args = overrides.render_args;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.render.timeout_ms = timeout_ms;
        }
        if let Some(root_tag) = overrides.root_tag {
            self.fixture.root_tag = root_tag;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "render timeout must be positive".to_string(),
            ));
        }
        if self.fixture.root_tag.trim().is_empty() {
            return Err(ConfigError::Validation(
                "fixture root tag cannot be empty".to_string(),
            ));
        }
        if self
            .render
            .command
            .as_deref()
            .is_some_and(|c| c.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "render command cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
