// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture trees for tengcheck.
//!
//! A fixture is an XML document describing the data handed to the template
//! engine together with the diagnostics the render is expected to report.
//! This crate turns it into a typed [`FixtureValue`] tree and a
//! [`DiagnosticIndex`] of expected positions.

mod builder;
mod diagnostics;
mod error;
mod hex_serde;
mod path;
mod value;

pub use builder::{Fixture, FixtureAttributes, FixtureBuilder, DEFAULT_ROOT_TAG};
pub use diagnostics::{basename, DiagnosticIndex, MarkOutcome, Position};
pub use error::{FixtureError, FixtureErrorKind};
pub use path::FixturePath;
pub use value::{Binary, FixtureDict, FixtureValue};
