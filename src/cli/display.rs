// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the wordex CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `WORDEX_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and non-TTY detection for pipelines.
//!
//! Renderers return strings and take `colored` explicitly so the output can be
//! checked in tests regardless of where they run.

use std::sync::OnceLock;

use wordex::{IndexStats, SearchResult};

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via WORDEX_THEME
    if let Ok(theme) = std::env::var("WORDEX_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// OneDark palette
mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
}

/// One Light palette
mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(RED);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used on stdout (TTY detection)
pub fn use_colors() -> bool {
    colors_for(no_color_set(), atty::is(atty::Stream::Stdout))
}

/// Same check for stderr, where errors are written.
pub fn use_error_colors() -> bool {
    colors_for(no_color_set(), atty::is(atty::Stream::Stderr))
}

// Respect NO_COLOR standard
fn no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

fn colors_for(no_color: bool, is_tty: bool) -> bool {
    !no_color && is_tty
}

/// Apply theme color with optional modifiers when `colored`
pub fn themed(colored: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if colored {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT TABLE
// ═══════════════════════════════════════════════════════════════════════════

const NAME_HEADER: &str = "fileName";
const FREQ_HEADER: &str = "frequency";

/// Border line: left ─── mid ─── mid ─── right
fn border(colored: bool, widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    themed(
        colored,
        GRAY,
        &[],
        &format!("{}{}{}", left, segments.join(mid), right),
    )
}

/// Content line: │ a │ b │ c │
fn cells(colored: bool, values: &[String]) -> String {
    let bar = themed(colored, GRAY, &[], "│");
    let inner: Vec<String> = values.iter().map(|v| format!(" {} ", v)).collect();
    format!("{}{}{}", bar, inner.join(&bar), bar)
}

/// Render ranked results as a table, most frequent first.
pub fn render_results(query: &str, results: &[SearchResult], colored: bool) -> String {
    let index_w = results.len().to_string().len().max(1);
    let name_w = results
        .iter()
        .map(|r| r.document_id.chars().count())
        .max()
        .unwrap_or(0)
        .max(NAME_HEADER.len());
    let freq_w = results
        .iter()
        .map(|r| r.frequency.to_string().len())
        .max()
        .unwrap_or(0)
        .max(FREQ_HEADER.len());
    let widths = [index_w, name_w, freq_w];

    let mut lines = Vec::with_capacity(results.len() + 6);
    lines.push(themed(colored, CYAN, &[BOLD], "Search Result:"));
    lines.push(border(colored, &widths, "┌", "┬", "┐"));
    lines.push(cells(
        colored,
        &[
            pad_right("#", index_w),
            pad_right(&themed(colored, CYAN, &[BOLD], NAME_HEADER), name_w),
            pad_left(&themed(colored, CYAN, &[BOLD], FREQ_HEADER), freq_w),
        ],
    ));
    lines.push(border(colored, &widths, "├", "┼", "┤"));

    for (i, result) in results.iter().enumerate() {
        lines.push(cells(
            colored,
            &[
                pad_left(&(i + 1).to_string(), index_w),
                pad_right(&result.document_id, name_w),
                pad_left(
                    &themed(colored, GREEN, &[], &result.frequency.to_string()),
                    freq_w,
                ),
            ],
        ));
    }
    lines.push(border(colored, &widths, "└", "┴", "┘"));

    if let Some(first) = results.first() {
        let summary = format!(
            "'{}' occurs {} times in the corpus",
            wordex::normalize_query(query),
            first.word_count
        );
        lines.push(themed(colored, GRAY, &[], &summary));
    }

    lines.join("\n")
}

/// Render the empty-result message.
pub fn render_not_found(colored: bool) -> String {
    format!(
        "{}\n{}",
        themed(colored, CYAN, &[BOLD], "Search Result:"),
        themed(colored, YELLOW, &[], "Not found")
    )
}

/// Render index statistics.
pub fn render_stats(stats: &IndexStats, colored: bool) -> String {
    let rows = [
        ("documents", stats.documents.to_string()),
        ("total words", stats.total_words.to_string()),
        ("distinct words", stats.distinct_words.to_string()),
        ("trie nodes", stats.nodes.to_string()),
    ];
    let label_w = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    rows.iter()
        .map(|(label, value)| {
            format!(
                "{}  {}",
                themed(colored, GRAY, &[], &pad_right(label, label_w)),
                themed(colored, GREEN, &[BOLD], value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render an error line.
pub fn render_error(message: &str, colored: bool) -> String {
    themed(colored, RED, &[BOLD], &format!("❌ {}", message))
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
