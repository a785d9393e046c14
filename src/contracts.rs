// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the word index.
//!
//! Debug-mode assertions over the properties the rest of the crate relies on.
//! They return immediately in release builds.
//!
//! | Contract                   | Property                                              |
//! |----------------------------|-------------------------------------------------------|
//! | `check_completion_counts`  | `completion_count == Σ document_frequencies` per node |
//! | `check_tree_shape`         | every non-root node has exactly one parent            |
//! | `check_results_ranked`     | results sorted by frequency, bounded by the limit     |
//!
//! # Usage
//!
//! ```ignore
//! // In debug builds, this panics if the invariant is violated
//! check_completion_counts(&index);
//! ```

use crate::index::TrieIndex;
use crate::types::SearchResult;

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that every node's completion count equals the sum of its
/// per-document frequencies.
///
/// # Panics (debug builds only)
/// Panics on the first node where the two disagree.
#[inline]
pub fn check_completion_counts(index: &TrieIndex) {
    if !cfg!(debug_assertions) {
        return;
    }

    for (position, node) in index.nodes().enumerate() {
        let sum: u64 = node
            .document_frequencies()
            .map(|(_, freq)| freq)
            .sum();
        debug_assert_eq!(
            sum,
            node.completion_count(),
            "Contract violation: node {} frequencies sum to {} but completion_count is {}",
            position,
            sum,
            node.completion_count()
        );
    }
}

/// Check that the arena forms a tree rooted at node 0.
///
/// # Panics (debug builds only)
/// Panics if a child id is out of bounds, points at the root, or has more
/// than one parent.
#[inline]
pub fn check_tree_shape(index: &TrieIndex) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut parents = vec![0usize; index.node_count()];
    for node in index.nodes() {
        for (ch, child) in node.children() {
            debug_assert!(
                child.as_usize() < parents.len(),
                "Contract violation: edge '{}' points at missing node {}",
                ch,
                child.as_usize()
            );
            if let Some(count) = parents.get_mut(child.as_usize()) {
                *count += 1;
            }
        }
    }

    for (position, &count) in parents.iter().enumerate() {
        let expected = usize::from(position != 0);
        debug_assert_eq!(
            count, expected,
            "Contract violation: node {} has {} parents (expected {})",
            position, count, expected
        );
    }
}

// ============================================================================
// SEARCH CONTRACTS
// ============================================================================

/// Check that results are ranked and respect the limit.
///
/// # Panics (debug builds only)
/// Panics if the result count exceeds `limit`, if any frequency is zero, if
/// frequencies increase down the list, or if rows disagree on `word_count`.
#[inline]
pub fn check_results_ranked(results: &[SearchResult], limit: Option<usize>) {
    if !cfg!(debug_assertions) {
        return;
    }

    if let Some(limit) = limit {
        debug_assert!(
            results.len() <= limit,
            "Contract violation: {} results exceed limit {}",
            results.len(),
            limit
        );
    }

    for (i, row) in results.iter().enumerate() {
        debug_assert!(
            row.frequency > 0,
            "Contract violation: results[{}] ('{}') has zero frequency",
            i,
            row.document_id
        );
        debug_assert!(
            row.frequency <= row.word_count,
            "Contract violation: results[{}] frequency {} exceeds word_count {}",
            i,
            row.frequency,
            row.word_count
        );
    }

    for pair in results.windows(2) {
        debug_assert!(
            pair[0].frequency >= pair[1].frequency,
            "Contract violation: '{}' ({}) ranked above '{}' ({})",
            pair[0].document_id,
            pair[0].frequency,
            pair[1].document_id,
            pair[1].frequency
        );
        debug_assert_eq!(
            pair[0].word_count, pair[1].word_count,
            "Contract violation: word_count differs between rows"
        );
    }
}
