// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{run, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = dispatch(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so result output on stdout stays pipeable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Query { file, limit } => {
            let ac = run::load_autocomplete(&file)?;
            run::query_loop(&ac, limit, io::stdin().lock(), io::stdout().lock())
        }
        Commands::Count { file, prefixes } => {
            let ac = run::load_autocomplete(&file)?;
            run::count(&ac, &prefixes, io::stdout().lock())
        }
        Commands::Top { file, limit } => {
            let ac = run::load_autocomplete(&file)?;
            run::top(&ac, limit, io::stdout().lock())
        }
        Commands::Batch { file, limit } => {
            let ac = run::load_autocomplete(&file)?;
            run::batch(&ac, limit, io::stdin().lock(), io::stdout().lock())
        }
    }
}
