// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text extraction from source files.
//!
//! HTML pages contribute only their visible body text: markup, comments and
//! the contents of `<script>`/`<style>` are dropped, every tag becomes a word
//! separator, and character entities are decoded. This is a tolerant scanner,
//! not a parser. Malformed markup degrades to extra text, never to an error.

use std::path::Path;

/// How a source file's bytes are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Html,
    Text,
}

impl DocumentFormat {
    /// Pick a format from the file extension. Anything not HTML is text.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("html" | "htm" | "xhtml") => DocumentFormat::Html,
            _ => DocumentFormat::Text,
        }
    }
}

/// Extract indexable text from raw file contents.
pub fn extract_text(raw: &str, format: DocumentFormat) -> String {
    match format {
        DocumentFormat::Html => html_to_text(raw),
        DocumentFormat::Text => raw.to_string(),
    }
}

/// Elements whose contents are never visible text.
const RAW_TEXT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Visible text of an HTML document's body.
pub fn html_to_text(html: &str) -> String {
    let body = body_slice(html);
    // ASCII lowercasing keeps byte offsets identical to `body`.
    let lower = body.to_ascii_lowercase();
    let mut out = String::with_capacity(body.len());
    let mut pos = 0;

    while let Some(rel) = body[pos..].find('<') {
        let start = pos + rel;
        out.push_str(&decode_entities(&body[pos..start]));
        out.push(' ');

        let rest = &lower[start..];
        pos = if let Some(end) = hidden_span_end(&lower, start) {
            end
        } else if is_tag_start(rest) {
            rest.find('>').map_or(lower.len(), |end| start + end + 1)
        } else {
            // A bare '<' in text, e.g. "a < b".
            out.push('<');
            start + 1
        };
    }

    out.push_str(&decode_entities(&body[pos..]));
    out
}

/// The inside of `<body ...>...</body>`, or the whole document without one.
fn body_slice(html: &str) -> &str {
    let lower = html.to_ascii_lowercase();
    let Some(open) = find_body_open(&lower) else {
        return html;
    };
    let Some(gt) = lower[open..].find('>') else {
        return html;
    };
    let content_start = open + gt + 1;
    let content_end = lower
        .rfind("</body")
        .filter(|&end| end >= content_start)
        .unwrap_or(html.len());
    &html[content_start..content_end]
}

/// Offset of the real `<body>` tag: not a longer tag name such as
/// `<bodyline>`, and not text inside a comment or raw-text element.
fn find_body_open(lower: &str) -> Option<usize> {
    let mut pos = 0;
    while let Some(rel) = lower[pos..].find('<') {
        let start = pos + rel;
        if opens_tag(&lower[start..], "body") {
            return Some(start);
        }
        pos = hidden_span_end(lower, start).unwrap_or(start + 1);
    }
    None
}

/// End of the comment or raw-text element opening at `start`.
///
/// `None` when `start` opens neither. An unterminated span runs to the end.
fn hidden_span_end(lower: &str, start: usize) -> Option<usize> {
    let rest = &lower[start..];
    if rest.starts_with("<!--") {
        return Some(rest.find("-->").map_or(lower.len(), |end| start + end + 3));
    }

    let tag = RAW_TEXT_TAGS.iter().find(|t| opens_tag(rest, t))?;
    let close = format!("</{}", tag);
    let end = rest
        .find(&close)
        .and_then(|end| lower[start + end..].find('>').map(|gt| start + end + gt + 1))
        .unwrap_or(lower.len());
    Some(end)
}

/// `rest` starts with `<name` followed by a delimiter.
fn opens_tag(rest: &str, name: &str) -> bool {
    rest.strip_prefix('<')
        .and_then(|r| r.strip_prefix(name))
        .and_then(|r| r.chars().next())
        .is_some_and(|c| c == '>' || c == '/' || c.is_whitespace())
}

/// `rest` starts with something that looks like markup rather than text.
fn is_tag_start(rest: &str) -> bool {
    rest[1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?')
}

/// Decode character entities. Unknown or malformed entities are kept as-is.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let decoded = after
            .find(';')
            .filter(|&semi| semi > 0 && semi <= 10)
            .and_then(|semi| decode_entity(&after[..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(|c| c == 'x' || c == 'X') {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "rsquo" | "lsquo" => Some('\u{2019}'),
        "ndash" | "mdash" => Some('-'),
        "hellip" => Some('…'),
        "copy" => Some('©'),
        _ => None,
    }
}
