//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wordex::{SearchResult, TokenizedDocument, TrieIndex};

// Re-export canonical test utilities from wordex::testing
pub use wordex::testing::{build_from_counts, build_from_words, make_repeated_doc};

// ============================================================================
// CORPUS FIXTURES
// ============================================================================

/// A small HTML page with `body` as its visible content.
pub fn html_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{}</title>\n<style>body {{ color: red; }}</style>\n</head>\n<body>\n{}\n<script>var hidden = 'secret';</script>\n</body>\n</html>\n",
        title, body
    )
}

/// Create a temporary data directory holding `(file name, contents)` pairs.
pub fn corpus_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (name, contents) in files {
        write_file(dir.path(), name, contents);
    }
    dir
}

pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("Failed to write fixture file");
}

// ============================================================================
// INDEX HELPERS
// ============================================================================

/// Build an index from raw token lists, without any tokenizer involved.
pub fn build_from_tokens(docs: &[(&str, &[&str])]) -> TrieIndex {
    TrieIndex::build(docs.iter().map(|(id, tokens)| {
        TokenizedDocument::new(*id, tokens.iter().map(|t| t.to_string()).collect())
    }))
    .expect("test documents have ids")
}

/// `(document_id, frequency)` pairs, in result order.
pub fn ranked(results: &[SearchResult]) -> Vec<(&str, u64)> {
    results
        .iter()
        .map(|r| (r.document_id.as_str(), r.frequency))
        .collect()
}

/// Assert the structural properties every built index must have.
pub fn assert_index_well_formed(index: &TrieIndex) {
    for (position, node) in index.nodes().enumerate() {
        let sum: u64 = node.document_frequencies().map(|(_, f)| f).sum();
        assert_eq!(
            sum,
            node.completion_count(),
            "node {} frequencies disagree with completion_count",
            position
        );
        for (doc, freq) in node.document_frequencies() {
            assert!(freq > 0, "node {} stores a zero frequency", position);
            assert!(
                index.document_name(doc).is_some(),
                "node {} references unknown document slot {:?}",
                position,
                doc
            );
        }
    }

    let stats = index.stats();
    let total: u64 = index.nodes().map(|n| n.completion_count()).sum();
    assert_eq!(total, stats.total_words, "completion counts must sum to total words");
}
