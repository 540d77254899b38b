// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the tissue-search command-line interface.
//!
//! Three subcommands for working with an index file outside the browser:
//! `search` runs a query through the same handler the widget uses, `check`
//! lints the index for entries the widget cannot match, and `inspect` prints a
//! short summary.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tissue-search",
    about = "Query and check static-site search indexes",
    version
)]
pub struct Cli {
    /// Log more (repeat for trace output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter an index the way the widget does and print the matches
    Search {
        /// Path to search_index.json
        index: PathBuf,

        /// Query terms (joined with spaces; empty shows every entry)
        query: Vec<String>,

        /// Print the results markup instead of a table
        #[arg(long)]
        html: bool,

        /// With --html, insert titles and urls without escaping
        #[arg(long, requires = "html")]
        raw: bool,
    },

    /// Report keywords that are not lowercase, empty keyword lists and duplicate urls
    Check {
        /// Path to search_index.json
        index: PathBuf,
    },

    /// Show entry and keyword counts for an index
    Inspect {
        /// Path to search_index.json
        index: PathBuf,
    },
}
