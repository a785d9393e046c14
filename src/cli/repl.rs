// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive lookup loop.
//!
//! Reads one query per line until `:q` or end of input. The index is borrowed
//! immutably for the whole session; each line is an independent search.

use std::io::{self, BufRead, Write};

use wordex::TrieIndex;

use super::display::{render_not_found, render_results};

/// Typed at the prompt to end the session.
pub const QUIT: &str = ":q";

pub const PROMPT: &str = "Enter the word you want to search (Enter ':q' to quit): ";

/// Prompt on `output`, read queries from `input`, print results to `output`.
///
/// Returns the number of queries answered.
pub fn run<R: BufRead, W: Write>(
    index: &TrieIndex,
    limit: Option<usize>,
    mut input: R,
    output: &mut W,
    colored: bool,
) -> io::Result<usize> {
    let mut answered = 0;
    let mut line = String::new();

    loop {
        write!(output, "\n\n{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let query = line.trim_end_matches(|c| c == '\r' || c == '\n');
        if query.trim() == QUIT {
            break;
        }

        let results = index.search_with_limit(query, limit);
        writeln!(output)?;
        if results.is_empty() {
            writeln!(output, "{}", render_not_found(colored))?;
        } else {
            writeln!(output, "{}", render_results(query, &results, colored))?;
        }
        answered += 1;
    }

    Ok(answered)
}
