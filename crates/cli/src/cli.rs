// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::report::OutputFormat;

/// Verify a template render against a fixture and its golden output
#[derive(Parser, Clone, Debug)]
#[command(name = "tengcheck", version, about)]
pub struct Cli {
    /// Template to render
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Fixture document with the data tree and expected diagnostics
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Golden output the render must reproduce
    #[arg(value_name = "EXPECTED")]
    pub expected: PathBuf,

    /// Config file (TOML)
    #[arg(long, value_name = "FILE", env = crate::env::TENGCHECK_CONFIG)]
    pub config: Option<PathBuf>,

    /// Render command receiving the request on stdin [env: TENGCHECK_RENDER_COMMAND]
    #[arg(long, value_name = "CMD")]
    pub render_command: Option<String>,

    /// Argument passed to the render command (repeatable)
    #[arg(long = "render-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub render_args: Vec<String>,

    /// Render timeout in milliseconds [env: TENGCHECK_RENDER_TIMEOUT_MS]
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Root element of the fixture document [env: TENGCHECK_ROOT_TAG]
    #[arg(long, value_name = "TAG")]
    pub root_tag: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Append a unified diff when output lines differ
    #[arg(long)]
    pub diff: bool,

    /// Trace pipeline steps on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Config values given as flags
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            render_command: self.render_command.clone(),
            render_args: self.render_args.clone(),
            timeout_ms: self.timeout_ms,
            root_tag: self.root_tag.clone(),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
