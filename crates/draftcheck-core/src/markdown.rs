//! Markdown processing utilities.
//!
//! Two views of a document are needed by the analyzers:
//!
//! - [`mask_code_blocks`] blanks out code while keeping every byte offset
//!   valid, so findings in the masked prose can be reported against the
//!   original text.
//! - [`strip_markdown`] removes syntax for counting purposes (words,
//!   sentences, syllables) and does not preserve length.
//!
//! Both are regex-based and line-oriented. They are heuristics, not a
//! CommonMark parser.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Fenced code block: a line starting with ``` through the next line starting with ```.
static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^```[^\n]*\n[\s\S]*?^```").expect("valid regex"));

/// Inline code span delimited by single backticks.
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("valid regex"));

/// ATX heading line: one to six `#` followed by whitespace.
static HEADING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s").expect("valid regex"));

/// Unordered or ordered list item; the last capture of each branch is the item text.
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-*+]\s+(.*)$|^\s*\d+\.\s+(.*)$").expect("valid regex")
});

/// Ordered rewrite rules applied by [`strip_markdown`].
static STRIP_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?m)^```[^\n]*\n[\s\S]*?^```", ""),
        (r"(?m)^#{1,6}\s+", ""),
        (r"\*\*(.+?)\*\*", "${1}"),
        (r"\*(.+?)\*", "${1}"),
        (r"__(.+?)__", "${1}"),
        (r"_(.+?)_", "${1}"),
        (r"~~(.+?)~~", "${1}"),
        (r"`(.+?)`", "${1}"),
        (r"(?m)^\s*[-*+]\s+", ""),
        (r"(?m)^\s*\d+\.\s+", ""),
        // Images go before links so `![alt](src)` is dropped whole.
        (r"!\[.*?\]\(.+?\)", ""),
        (r"\[(.+?)\]\(.+?\)", "${1}"),
        (r"(?m)^>\s+", ""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid regex"), replacement))
    .collect()
});

/// Replace fenced code blocks and inline code with spaces.
///
/// The result has exactly the same byte length as the input, and newlines
/// inside fenced blocks are kept, so line numbers and byte offsets computed
/// on the masked text are valid against the original. Multi-byte characters
/// become as many spaces as their UTF-8 width.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn mask_code_blocks(text: &str) -> String {
    let fenced = FENCED_CODE.replace_all(text, |caps: &Captures<'_>| blank(&caps[0]));
    INLINE_CODE
        .replace_all(&fenced, |caps: &Captures<'_>| blank(&caps[0]))
        .into_owned()
}

fn blank(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    for ch in code.chars() {
        if ch == '\n' {
            out.push('\n');
        } else {
            out.extend(std::iter::repeat_n(' ', ch.len_utf8()));
        }
    }
    out
}

/// Strip common markdown syntax, returning text suitable for counting.
///
/// Removes fenced code blocks, heading markers, emphasis and strikethrough
/// delimiters, inline code backticks, list markers, images, link syntax
/// (keeping the link text) and blockquote markers.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn strip_markdown(text: &str) -> String {
    STRIP_RULES
        .iter()
        .fold(text.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}

/// ATX heading level of a single line (`1..=6`), or `None` for other lines.
///
/// Seven or more `#` never count as a heading.
pub fn heading_level(line: &str) -> Option<u8> {
    HEADING_LINE
        .captures(line)
        .and_then(|caps| u8::try_from(caps[1].len()).ok())
}

/// A list item parsed from a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
    /// Item text after the marker and its trailing whitespace.
    pub text: &'a str,
    /// Byte offset of `text` within the line.
    pub text_start: usize,
}

/// Parse a line as an unordered (`-`, `*`, `+`) or ordered (`1.`) list item.
///
/// Returns `None` when the line is not an item or the item text is blank.
pub fn parse_list_line(line: &str) -> Option<ListLine<'_>> {
    let caps = LIST_ITEM.captures(line)?;
    let item = caps.get(1).or_else(|| caps.get(2))?;
    if item.as_str().trim().is_empty() {
        return None;
    }
    Some(ListLine {
        text: item.as_str(),
        text_start: item.start(),
    })
}
