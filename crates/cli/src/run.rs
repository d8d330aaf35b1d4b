// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The check pipeline: validate inputs, build the fixture, render, verify,
//! report.

use crate::cli::Cli;
use crate::config::{CheckConfig, ConfigError};
use crate::output_diagnostic::{print_error, print_verbose};
use crate::render::{CommandRenderer, RenderError, RenderRequest, Renderer};
use crate::report::Report;
use crate::verify::{verify, GoldenOutput, Verdict};
use std::io::Write;
use std::path::{Path, PathBuf};
use tengcheck_fixture::{FixtureBuilder, FixtureError};
use thiserror::Error;

/// Process exit codes
pub mod exit_codes {
    /// Output and diagnostics match, render status 0
    pub const SUCCESS: i32 = 0;
    /// Invalid input paths or configuration
    pub const USAGE: i32 = 1;
    /// Fixture document unreadable or not well-formed
    pub const FIXTURE_PARSE: i32 = 2;
    /// Fixture root element missing
    pub const FIXTURE_ROOT: i32 = 3;
    /// Fixture content invalid
    pub const FIXTURE_INVALID: i32 = 4;
    /// Render terminated without output
    pub const FATAL_GENERATION: i32 = 5;
    /// Output or diagnostics differ from the fixture
    pub const MISMATCH: i32 = 6;
    /// Render collaborator failed, or the golden file is unreadable
    pub const RENDER_FAILED: i32 = 7;
}

/// Errors that stop a check before a verdict exists
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{}", .0.join("\n"))]
    InvalidInputs(Vec<String>),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("No render command configured (use --render-command, TENGCHECK_RENDER_COMMAND or [render] command)")]
    MissingRenderCommand,

    #[error("Failed to build fixture from '{path}': {source}")]
    Fixture {
        path: PathBuf,
        #[source]
        source: FixtureError,
    },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to read expected output '{path}': {source}")]
    Golden {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl CheckError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::InvalidInputs(_)
            | CheckError::Config(_)
            | CheckError::MissingRenderCommand => exit_codes::USAGE,
            CheckError::Fixture { source, .. } if source.is_document_error() => {
                exit_codes::FIXTURE_PARSE
            }
            CheckError::Fixture { source, .. } if source.is_missing_root() => {
                exit_codes::FIXTURE_ROOT
            }
            CheckError::Fixture { .. } => exit_codes::FIXTURE_INVALID,
            CheckError::Render(_) | CheckError::Golden { .. } | CheckError::Report(_) => {
                exit_codes::RENDER_FAILED
            }
        }
    }
}

/// Paths a check reads
#[derive(Clone, Copy, Debug)]
pub struct CheckInputs<'a> {
    pub template: &'a Path,
    pub data: &'a Path,
    pub expected: &'a Path,
}

impl<'a> CheckInputs<'a> {
    pub fn from_cli(cli: &'a Cli) -> Self {
        Self {
            template: &cli.template,
            data: &cli.data,
            expected: &cli.expected,
        }
    }

    /// Every input must be an existing regular file; all problems are collected
    pub fn validate(&self) -> Result<(), CheckError> {
        let problems: Vec<String> = [
            ("template", self.template),
            ("data", self.data),
            ("expected_output", self.expected),
        ]
        .into_iter()
        .filter(|(_, path)| !path.is_file())
        .map(|(role, path)| {
            format!(
                "Invalid {role} specified: '{}' does not exist or is not a file",
                path.display()
            )
        })
        .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CheckError::InvalidInputs(problems))
        }
    }
}

fn trace(verbose: bool, msg: impl std::fmt::Display) {
    if verbose {
        print_verbose(msg);
    }
}

/// Exit code for a finished check
pub fn verdict_exit_code(verdict: &Verdict) -> i32 {
    if verdict.fatal {
        exit_codes::FATAL_GENERATION
    } else if !verdict.success {
        exit_codes::MISMATCH
    } else {
        verdict.status_exit_code()
    }
}

/// Build the fixture, render the template and verify the result
pub async fn run_check<R: Renderer>(
    renderer: &R,
    inputs: CheckInputs<'_>,
    config: &CheckConfig,
    verbose: bool,
) -> Result<Verdict, CheckError> {
    let fixture = FixtureBuilder::new()
        .with_root_tag(config.fixture.root_tag.clone())
        .load(inputs.data)
        .map_err(|source| CheckError::Fixture {
            path: inputs.data.to_path_buf(),
            source,
        })?;
    trace(
        verbose,
        format_args!(
            "fixture {}: {} top-level values, {} expected diagnostics",
            inputs.data.display(),
            fixture.data.len(),
            fixture.diagnostics.expected_count()
        ),
    );

    let request = RenderRequest::new(inputs.template, &fixture, &config.render);
    let result = renderer.render(&request).await?;
    trace(
        verbose,
        format_args!(
            "render status {}: {} bytes, {} diagnostics",
            result.status,
            result.output.len(),
            result.error_log.len()
        ),
    );

    // A fatal render is never compared, so its golden file is not needed
    let golden = if result.is_fatal() {
        GoldenOutput::default()
    } else {
        let golden =
            GoldenOutput::load(inputs.expected).map_err(|source| CheckError::Golden {
                path: inputs.expected.to_path_buf(),
                source,
            })?;
        trace(
            verbose,
            format_args!(
                "expected output {}: {} lines",
                inputs.expected.display(),
                golden.raw_lines().len()
            ),
        );
        golden
    };

    Ok(verify(fixture.diagnostics, &result, &golden))
}

/// Run a whole check from parsed arguments, returning the process exit code
pub async fn run(cli: &Cli) -> i32 {
    match run_inner(cli).await {
        Ok(code) => code,
        Err(e) => {
            print_error(&e);
            e.exit_code()
        }
    }
}

async fn run_inner(cli: &Cli) -> Result<i32, CheckError> {
    let inputs = CheckInputs::from_cli(cli);
    inputs.validate()?;

    let config = CheckConfig::resolve(cli.config.as_deref(), cli.overrides())?;
    let renderer =
        CommandRenderer::from_config(&config.render).ok_or(CheckError::MissingRenderCommand)?;
    trace(
        cli.verbose,
        format_args!(
            "renderer '{}' with {}ms timeout",
            renderer.command(),
            renderer.timeout_ms()
        ),
    );

    let verdict = run_check(&renderer, inputs, &config, cli.verbose).await?;
    let report = Report::new(&verdict)
        .with_diff(cli.diff)
        .render(cli.output_format)?;
    print!("{report}");
    let _ = std::io::stdout().flush();

    trace(cli.verbose, format_args!("success: {}", verdict.success));
    Ok(verdict_exit_code(&verdict))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
