// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Building an index from a directory of documents.
//!
//! This is the supplier side of the index: enumerate files, pull visible text
//! out of them, clean and tokenize it, drop stop words, and hand the finished
//! batch to [`TrieIndex::build`]. The index never sees a file or an I/O error.

pub mod config;
pub mod extract;
pub mod parallel;
pub mod stopwords;
pub mod tokenize;

use std::path::PathBuf;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::index::TrieIndex;
use crate::types::IndexStats;

pub use config::*;
pub use extract::*;
pub use parallel::*;
pub use stopwords::*;
pub use tokenize::*;

/// Where and how to build.
#[derive(Clone, Debug, Default)]
pub struct BuildOptions {
    pub data_dir: PathBuf,
    /// Explicit config file; otherwise `wordex.json` in `data_dir` if present.
    pub config: Option<PathBuf>,
    /// Suppress per-file and summary lines. Warnings still print.
    pub quiet: bool,
}

impl BuildOptions {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }
}

/// Create a progress style for the loading bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Load every document under `options.data_dir` and build the index.
///
/// Unreadable files are skipped with a warning. A missing data directory or a
/// malformed config file is an error.
pub fn build_from_dir(options: &BuildOptions) -> Result<TrieIndex, String> {
    let data_dir = options.data_dir.as_path();
    if !options.quiet {
        eprintln!("Reading files from: {}", data_dir.display());
    }

    let config = CorpusConfig::discover(data_dir, options.config.as_deref())?;
    let tokenizer = Tokenizer::new(config.stop_words());
    let sources = list_sources(data_dir, &config)?;

    if sources.is_empty() {
        eprintln!("⚠️  No documents found in {}", data_dir.display());
    }

    let loaded = load_with_progress(&sources, &tokenizer, options.quiet);
    let index = TrieIndex::build(loaded.docs).map_err(|e| format!("Failed to build index: {}", e))?;

    if !options.quiet {
        print_summary(&index.stats(), loaded.failures.len());
    }
    Ok(index)
}

#[cfg(feature = "parallel")]
fn load_with_progress(sources: &[SourceFile], tokenizer: &Tokenizer, quiet: bool) -> LoadedDocuments {
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(sources.len() as u64)
    };
    progress.set_style(create_progress_style());
    progress.set_prefix("Loading");
    progress.set_message("documents...");

    let loaded = load_documents_with_progress(sources, tokenizer, quiet, &progress);
    progress.finish_and_clear();
    loaded
}

#[cfg(not(feature = "parallel"))]
fn load_with_progress(sources: &[SourceFile], tokenizer: &Tokenizer, quiet: bool) -> LoadedDocuments {
    load_documents_with_progress(sources, tokenizer, quiet)
}

fn print_summary(stats: &IndexStats, skipped: usize) {
    eprintln!();
    eprintln!("✅ Index built");
    eprintln!(
        "   {} documents │ {} words │ {} distinct │ {} nodes",
        stats.documents, stats.total_words, stats.distinct_words, stats.nodes
    );
    if skipped > 0 {
        eprintln!("   {} files skipped", skipped);
    }
}

