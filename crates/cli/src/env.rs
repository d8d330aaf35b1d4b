// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by tengcheck are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

/// `TENGCHECK_RENDER_COMMAND`: Render collaborator executable.
pub fn render_command() -> Option<String> {
    non_empty(std::env::var(names::TENGCHECK_RENDER_COMMAND).ok())
}

/// `TENGCHECK_RENDER_TIMEOUT_MS`: Render collaborator timeout.
pub fn render_timeout_ms() -> Option<u64> {
    parse_u64(std::env::var(names::TENGCHECK_RENDER_TIMEOUT_MS).ok())
}

/// `TENGCHECK_ROOT_TAG`: Expected root element of fixture documents.
pub fn root_tag() -> Option<String> {
    non_empty(std::env::var(names::TENGCHECK_ROOT_TAG).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_u64(value: Option<String>) -> Option<u64> {
    value.and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
