// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operator-facing messages on stderr.
//!
//! The report itself goes to stdout; everything here is about the run:
//! bad input paths, fixture and render failures, and `--verbose` traces.
//! Colour is used only when stderr is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Print an error message to stderr.
pub fn print_error(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_line(writer, RED, format_args!("Error: {msg}"), is_terminal);
}

/// Print a `--verbose` trace line to stderr.
pub fn print_verbose(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_verbose(&mut io::stderr(), msg, is_tty);
}

fn write_verbose<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_line(writer, DIM, format_args!("tengcheck: {msg}"), is_terminal);
}

fn write_line<W: Write>(writer: &mut W, colour: &str, line: impl Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "{colour}{line}{RESET}");
    } else {
        let _ = writeln!(writer, "{line}");
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
