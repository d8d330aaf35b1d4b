// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tengcheck
//!
//! Golden-record verification for template renders. A fixture document
//! supplies the data tree and the diagnostics the render is expected to
//! report; the render collaborator produces output and a diagnostic log;
//! the verification engine reconciles both against the fixture and the
//! golden output file.

pub mod cli;
pub mod config;
pub mod env;
pub mod output_diagnostic;
pub mod render;
pub mod report;
pub mod run;
pub mod verify;

pub use tengcheck_fixture as fixture;
