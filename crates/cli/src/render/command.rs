// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Renderer backed by an external process.
//!
//! The request is written to the child's stdin as JSON; the child answers on
//! stdout with a JSON [`RenderResult`].

use super::{RenderError, RenderRequest, RenderResult, Renderer};
use crate::config::{RenderConfig, DEFAULT_TIMEOUT_MS};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Runs a render command per request
#[derive(Clone, Debug)]
pub struct CommandRenderer {
    command: String,
    args: Vec<String>,
    timeout_ms: u64,
}

impl CommandRenderer {
    /// Create a renderer with the default timeout
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Create a renderer from config, `None` when no command is configured
    pub fn from_config(config: &RenderConfig) -> Option<Self> {
        let command = config.command.as_ref()?;
        Some(
            Self::new(command.clone())
                .with_args(config.args.clone())
                .with_timeout(config.timeout_ms),
        )
    }

    /// Set extra arguments
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}

impl Renderer for CommandRenderer {
    async fn render(&self, request: &RenderRequest<'_>) -> Result<RenderResult, RenderError> {
        let request_json = serde_json::to_string(request)
            .map_err(|e| RenderError::Serialization(e.to_string()))?;

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RenderError::Spawn {
                command: self.command.clone(),
                message: e.to_string(),
            })?;

        // The request is written while the child runs, both under the timeout
        let stdin = child.stdin.take();
        let exchange = async move {
            let write = async {
                let Some(mut stdin) = stdin else {
                    return Ok(());
                };
                match stdin.write_all(request_json.as_bytes()).await {
                    // The child may answer without reading the whole request
                    Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => Err(e),
                    _ => Ok(()),
                }
            };
            let (written, output) = tokio::join!(write, child.wait_with_output());
            written.map_err(|e| RenderError::Io(e.to_string()))?;
            output.map_err(|e| RenderError::Io(e.to_string()))
        };

        let timeout = Duration::from_millis(self.timeout_ms);
        let output = match tokio::time::timeout(timeout, exchange).await {
            Ok(result) => result?,
            // kill_on_drop reaps the child once the exchange is dropped
            Err(_) => return Err(RenderError::Timeout(self.timeout_ms)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RenderError::NonZeroExit {
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(stdout.trim()).map_err(|e| RenderError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
