// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tengcheck binary entry point.

use clap::Parser;

use tengcheck::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let code = tengcheck::run::run(&cli).await;
    std::process::exit(code);
}
