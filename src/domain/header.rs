//! Plugin header field parsing.
//!
//! A header field is a line of the form `Key: value`, optionally preceded by
//! comment markup (`/`, `*`, `#`, `@`, spaces, tabs). Keys match exactly and
//! case-sensitively; only the first matching line counts.

use std::ops::Range;

/// Readme key holding the latest verified-compatible WordPress version.
pub const TESTED_UP_TO: &str = "Tested up to";

const COMMENT_MARKUP: [char; 6] = [' ', '\t', '/', '*', '#', '@'];

/// A located header field within a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField<'a> {
    /// Trimmed value text.
    pub value: &'a str,
    /// 1-based line number.
    pub line: usize,
    span: Range<usize>,
    needs_space: bool,
}

/// Find the first line declaring `key` and return its value.
pub fn find_field<'a>(text: &'a str, key: &str) -> Option<HeaderField<'a>> {
    let mut offset = 0;
    for (idx, raw) in text.split_inclusive('\n').enumerate() {
        let body = strip_line_ending(raw);
        if let Some((span, needs_space)) = match_line(body, key) {
            let span = (offset + span.start)..(offset + span.end);
            let value = &text[span.clone()];
            return Some(HeaderField { value, line: idx + 1, span, needs_space });
        }
        offset += raw.len();
    }
    None
}

/// Rewrite the value of `key`, leaving every other byte untouched.
///
/// Returns `None` when the document has no line declaring `key`.
pub fn replace_field(text: &str, key: &str, value: &str) -> Option<String> {
    let field = find_field(text, key)?;
    let mut out = String::with_capacity(text.len() + value.len());
    out.push_str(&text[..field.span.start]);
    if field.needs_space {
        out.push(' ');
    }
    out.push_str(value);
    out.push_str(&text[field.span.end..]);
    Some(out)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Byte range of the value within `line`, plus whether a separating space
/// must be inserted when writing (empty value directly after the colon).
fn match_line(line: &str, key: &str) -> Option<(Range<usize>, bool)> {
    let rest = line.trim_start_matches(COMMENT_MARKUP);
    let after_colon = rest.strip_prefix(key)?.strip_prefix(':')?;
    let colon_end = line.len() - after_colon.len();

    let value_part = after_colon.trim_start();
    let start = line.len() - value_part.len();

    let mut value = value_part.trim_end();
    if let Some(stripped) = value.strip_suffix("*/") {
        value = stripped.trim_end();
    }

    Some((start..start + value.len(), value.is_empty() && start == colon_end))
}
