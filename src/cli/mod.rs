// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the autocomplete command-line interface.
//!
//! Four subcommands over one dataset file: `query` runs the interactive prompt,
//! `count` answers match counts, `top` lists the heaviest and the
//! lexicographically first terms, and `batch` answers a stream of prefixes as
//! JSON lines.

pub mod display;
pub mod run;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "autocomplete",
    about = "Ranked prefix autocomplete over a weighted term dataset",
    version
)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read prefixes from stdin and print the heaviest matches for each
    Query {
        /// Dataset file (text format, or JSON when the extension is .json)
        file: String,

        /// Maximum number of matches to print per prefix
        #[arg(short = 'k', long, default_value = "10")]
        limit: usize,
    },

    /// Print how many terms start with each prefix
    Count {
        /// Dataset file
        file: String,

        /// Prefixes to count
        #[arg(required = true)]
        prefixes: Vec<String>,
    },

    /// Print the first terms by lexicographic order and by weight
    Top {
        /// Dataset file
        file: String,

        /// Number of terms per listing
        #[arg(short = 'k', long, default_value = "10")]
        limit: usize,
    },

    /// Answer prefixes from stdin as JSON lines, in parallel
    Batch {
        /// Dataset file
        file: String,

        /// Maximum number of matches included per prefix
        #[arg(short = 'k', long, default_value = "10")]
        limit: usize,
    },
}
