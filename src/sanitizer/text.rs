//! Text-run normalization and the final single-line pass.

use std::sync::LazyLock;

use regex::Regex;

const NBSP: char = '\u{a0}';

static BETWEEN_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize one text node for output.
///
/// Runs of ordinary whitespace collapse to a single space. Non-breaking
/// spaces are kept, each one written as `&nbsp;`. `&`, `<` and `>` are
/// escaped. Leading whitespace (non-breaking included) is removed when the
/// node is the first child of its parent, trailing whitespace when it is the
/// last child.
pub fn normalize_text(raw: &str, first: bool, last: bool) -> String {
    let mut text = raw;
    if first {
        text = text.trim_start();
    }
    if last {
        text = text.trim_end();
    }

    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c == NBSP {
            out.push_str("&nbsp;");
            in_space = false;
            continue;
        }
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
            continue;
        }
        in_space = false;
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Collapse assembled output onto a single line: whitespace between tags is
/// removed, any other whitespace run becomes one space, and the ends are
/// trimmed.
pub fn single_line(html: &str) -> String {
    let joined = BETWEEN_TAGS.replace_all(html, "><");
    WHITESPACE_RUN.replace_all(&joined, " ").trim().to_string()
}

/// Returns `true` if the string holds nothing but whitespace.
pub(crate) fn is_blank(content: &str) -> bool {
    content.trim().is_empty()
}
