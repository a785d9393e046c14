// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding shared by the tokenizer and the query path.
//!
//! The index stores tokens verbatim, so a query only matches when it was
//! folded exactly the way the tokens were. Both sides go through [`fold`];
//! nothing else in the crate lowercases text on its own.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Fold a string for indexing: strip diacritics and lowercase.
///
/// - "Café" → "cafe"
/// - "naïve" → "naive"
/// - "HARĪṢH" → "harish"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
///
/// Without the feature this only lowercases.
#[cfg(feature = "unicode-normalization")]
pub fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase only. Assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Normalize a raw query into a lookup key.
///
/// Every whitespace character is removed, not just the ends: `" c a t "`
/// becomes `"cat"`. The remainder is folded with [`fold`].
pub fn normalize_query(query: &str) -> String {
    let compact: String = query.chars().filter(|c| !c.is_whitespace()).collect();
    fold(&compact)
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
