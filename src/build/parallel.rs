// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel document loading.
//!
//! Reading, extracting and tokenizing files is independent per file, so it
//! runs on Rayon's pool. The index itself is still built on one thread from
//! the assembled batch: `par_iter().collect()` keeps input order, and the
//! input is sorted by file name, so the batch (and therefore the ranking
//! tiebreaker) is the same on every run.
//!
//! A file that cannot be read is reported and left out. It never aborts the
//! load and never reaches the index.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::types::TokenizedDocument;

use super::config::CorpusConfig;
use super::extract::{extract_text, DocumentFormat};
use super::tokenize::Tokenizer;

/// A file selected for indexing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// File name, used as the document id.
    pub name: String,
    pub path: PathBuf,
}

/// Result of loading a batch of sources.
#[derive(Debug, Default)]
pub struct LoadedDocuments {
    /// Successfully tokenized documents, in source order.
    pub docs: Vec<TokenizedDocument>,
    /// One message per source that was left out.
    pub failures: Vec<String>,
}

/// List the indexable files directly inside `data_dir`, sorted by name.
///
/// Subdirectories are not descended into. Fails only when the directory
/// itself cannot be read.
pub fn list_sources(data_dir: &Path, config: &CorpusConfig) -> Result<Vec<SourceFile>, String> {
    let entries = fs::read_dir(data_dir)
        .map_err(|e| format!("Failed to read data directory {}: {}", data_dir.display(), e))?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("⚠️  Skipping unreadable entry in {}: {}", data_dir.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || !config.accepts(&path) {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        sources.push(SourceFile { name, path });
    }

    sources.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(sources)
}

/// Read, extract and tokenize one source file.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_document(source: &SourceFile, tokenizer: &Tokenizer) -> Result<TokenizedDocument, String> {
    let bytes = fs::read(&source.path)
        .map_err(|e| format!("Failed to read {}: {}", source.path.display(), e))?;
    let raw = String::from_utf8_lossy(&bytes);
    let text = extract_text(&raw, DocumentFormat::from_path(&source.path));

    Ok(TokenizedDocument::new(
        source.name.clone(),
        tokenizer.tokenize(&text),
    ))
}

/// Load all sources in parallel.
///
/// Prints `✔ <name>` per loaded file unless `quiet`, and a warning per
/// failure regardless.
pub fn load_documents(sources: &[SourceFile], tokenizer: &Tokenizer, quiet: bool) -> LoadedDocuments {
    #[cfg(feature = "parallel")]
    let results: Vec<_> = sources
        .par_iter()
        .map(|source| load_one(source, tokenizer, quiet, &print_line))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = sources
        .iter()
        .map(|source| load_one(source, tokenizer, quiet, &print_line))
        .collect();

    collect_loaded(results)
}

/// Load all sources in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    sources: &[SourceFile],
    tokenizer: &Tokenizer,
    quiet: bool,
    progress: &ProgressBar,
) -> LoadedDocuments {
    let counter = AtomicUsize::new(0);
    let total = sources.len();
    // Hide the bar while a line is written so it is redrawn below the line.
    let print_above = |line: String| progress.suspend(|| eprintln!("{}", line));

    let results: Vec<_> = sources
        .par_iter()
        .map(|source| {
            let result = load_one(source, tokenizer, quiet, &print_above);

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            result
        })
        .collect();

    collect_loaded(results)
}

/// Load all sources with progress reporting.
/// Non-parallel fallback (no progress).
#[cfg(not(feature = "parallel"))]
pub fn load_documents_with_progress(
    sources: &[SourceFile],
    tokenizer: &Tokenizer,
    quiet: bool,
) -> LoadedDocuments {
    load_documents(sources, tokenizer, quiet)
}

fn print_line(line: String) {
    eprintln!("{}", line);
}

/// Load one source, reporting the outcome through `log`.
fn load_one<F>(
    source: &SourceFile,
    tokenizer: &Tokenizer,
    quiet: bool,
    log: &F,
) -> Result<TokenizedDocument, String>
where
    F: Fn(String) + Sync,
{
    let result = read_document(source, tokenizer);
    match &result {
        Ok(_) if !quiet => log(format!("✔ {}", source.name)),
        Ok(_) => {}
        Err(e) => log(format!("⚠️  {}; skipping", e)),
    }
    result
}

fn collect_loaded(results: Vec<Result<TokenizedDocument, String>>) -> LoadedDocuments {
    let mut loaded = LoadedDocuments::default();
    for result in results {
        match result {
            Ok(doc) => loaded.docs.push(doc),
            Err(e) => loaded.failures.push(e),
        }
    }
    loaded
}
