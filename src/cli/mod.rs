// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the wordex command-line interface.
//!
//! Every subcommand builds the index from a data directory first; nothing is
//! written to disk. `search` answers one query, `repl` keeps prompting until
//! `:q`, and `stats` reports the shape of the built index.

pub mod display;
pub mod repl;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use wordex::build::BuildOptions;

#[derive(Parser)]
#[command(
    name = "wordex",
    about = "Word-frequency search over a directory of documents",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that reads a corpus.
#[derive(Args, Clone, Debug)]
pub struct CorpusArgs {
    /// Directory containing the documents to index
    pub dir: String,

    /// Corpus config file (defaults to <DIR>/wordex.json when present)
    #[arg(long)]
    pub config: Option<String>,

    /// Only print warnings and results
    #[arg(short, long)]
    pub quiet: bool,
}

impl CorpusArgs {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            data_dir: PathBuf::from(&self.dir),
            config: self.config.as_ref().map(PathBuf::from),
            quiet: self.quiet,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index a directory and look up one word
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Word to look up
        query: String,

        /// Maximum number of documents to show (default: all)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Index a directory and look up words interactively
    Repl {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Maximum number of documents to show per lookup (default: all)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Index a directory and print index statistics
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}
