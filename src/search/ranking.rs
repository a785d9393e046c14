// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: most frequent first, then first-seen order.
//!
//! Frequency is the only score. Ties fall back to the document slot, which is
//! the order documents were first encountered during build, so the same
//! corpus always ranks the same way.

use crate::types::DocId;
use std::cmp::Ordering;

/// Compare two `(document, frequency)` hits for ranking.
///
/// Sort order:
/// 1. **Frequency** - descending
/// 2. **Doc slot** - ascending (first-seen order)
pub fn compare_hits(a: &(DocId, u64), b: &(DocId, u64)) -> Ordering {
    match b.1.cmp(&a.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        ord => ord,
    }
}
