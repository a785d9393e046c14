// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning extracted text into index tokens.
//!
//! Cleaning folds case, drops apostrophes so contractions stay one word,
//! turns every other non-alphanumeric character into a separator, and
//! collapses runs of whitespace. The tokenizer then splits and filters stop
//! words. Digits are kept: "covid19" is a word.

use crate::util::normalize::fold;

use super::stopwords::StopWords;

/// Fold, strip apostrophes, replace punctuation with spaces, condense.
pub fn clean_text(text: &str) -> String {
    let folded = fold(text);
    let mut cleaned = String::with_capacity(folded.len());
    let mut pending_space = false;

    for c in folded.chars() {
        if is_apostrophe(c) {
            continue;
        }
        if c.is_alphanumeric() {
            if pending_space && !cleaned.is_empty() {
                cleaned.push(' ');
            }
            pending_space = false;
            cleaned.push(c);
        } else {
            pending_space = true;
        }
    }

    cleaned
}

#[inline]
fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '\u{02BC}')
}

/// Splits cleaned text into tokens and drops stop words.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stop_words: StopWords,
}

impl Tokenizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    /// A tokenizer with the default English stop words.
    pub fn english() -> Self {
        Self::new(StopWords::english())
    }

    /// Tokens of `text` in document order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        clean_text(text)
            .split(' ')
            .filter(|word| !word.is_empty() && !self.stop_words.contains(word))
            .map(str::to_string)
            .collect()
    }
}
