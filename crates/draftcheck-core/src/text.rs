//! Text processing utilities.
//!
//! Word, sentence and syllable counting over markdown-stripped text, plus a
//! [`LineIndex`] for turning byte offsets into line/column positions.

use regex::Regex;

use crate::dictionaries::abbreviations::is_abbreviation;
use crate::markdown::strip_markdown;

/// Count whitespace-separated words in the markdown-stripped text.
pub fn count_words(text: &str) -> usize {
    strip_markdown(text).split_whitespace().count()
}

/// Split text into sentences.
///
/// Markdown is stripped first. Whitespace tokens accumulate into the current
/// sentence; a token ending in `.`, `!` or `?` closes it unless the token is a
/// known abbreviation (`Dr.`, `etc.`, `e.g.`). Any trailing tokens form a
/// final sentence.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let plain = strip_markdown(text);
    let mut sentences = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for token in plain.split_whitespace() {
        current.push(token);
        if token.ends_with(['.', '!', '?']) && !is_abbreviation(token) {
            sentences.push(current.join(" "));
            current.clear();
        }
    }
    if !current.is_empty() {
        sentences.push(current.join(" "));
    }

    sentences
}

/// Number of sentences, never less than one.
pub fn count_sentences(text: &str) -> usize {
    split_into_sentences(text).len().max(1)
}

/// Estimate the syllables in a single word.
///
/// Counts groups of consecutive vowels (`aeiouy`) over the lowercased ASCII
/// letters, drops a silent trailing `e`, and adds one back for a consonant +
/// `le` ending. Words of two letters or fewer count as one syllable.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<u8> = word
        .bytes()
        .map(|b| b.to_ascii_lowercase())
        .filter(u8::is_ascii_lowercase)
        .collect();
    if letters.len() <= 2 {
        return 1;
    }

    let is_vowel = |b: u8| b"aeiouy".contains(&b);
    let mut count = 0usize;
    let mut prev_vowel = false;
    for &b in &letters {
        let vowel = is_vowel(b);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if letters.ends_with(b"e") && count > 1 {
        count -= 1;
    }
    if letters.ends_with(b"le") && !is_vowel(letters[letters.len() - 3]) {
        count += 1;
    }

    count.max(1)
}

/// Build a case-insensitive whole-word matcher for a literal word or phrase.
pub(crate) fn whole_word(phrase: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase))).expect("escaped literal")
}

/// Maps byte offsets to 1-based line numbers and in-line columns.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset at which each line starts.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Index the line starts of `text`.
    pub fn new(text: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { line_starts }
    }

    /// Returns `(line, column)` for a byte offset; `line` is 1-based and
    /// `column` is the byte distance from the start of that line.
    pub fn locate(&self, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let start = self.line_starts[line.saturating_sub(1)];
        (line.max(1), offset - start)
    }

    /// 1-based line number of a byte offset.
    pub fn line(&self, offset: usize) -> usize {
        self.locate(offset).0
    }
}

/// Round to one decimal place, halves toward positive infinity.
///
/// `f64::round` sends -2.25 to -2.3; this sends it to -2.2.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Integer percentage of `count` in `total`, or 0 when `total` is 0.
pub(crate) fn percent(count: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else {
        (count as f64 / total as f64 * 100.0).round() as usize
    }
}
