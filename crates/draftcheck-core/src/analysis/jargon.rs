//! Technical jargon detection for non-technical readers.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::{LineIndex, whole_word};
use crate::word_lists::{TECHNICAL_AUDIENCE_MARKERS, TECHNICAL_JARGON};

use super::reports::{Severity, StyleCategory, StyleIssue};
use super::style::issue_at;

/// An explicit "non-technical" / "nontechnical" / "non technical".
static NON_TECHNICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnon[- ]?technical\b").expect("valid regex"));

static JARGON_MATCHERS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    TECHNICAL_JARGON
        .iter()
        .map(|&word| (word, whole_word(word)))
        .collect()
});

/// Whether a reader-context description implies a technical audience.
///
/// An empty context counts as technical. An explicit "non-technical" wins
/// over any other marker.
pub fn is_technical_audience(reader_context: &str) -> bool {
    let lower = reader_context.trim().to_lowercase();
    if lower.is_empty() {
        return true;
    }
    if NON_TECHNICAL_RE.is_match(&lower) {
        return false;
    }
    TECHNICAL_AUDIENCE_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

/// Flag every jargon term in `prose`, ordered by position.
pub(super) fn find_jargon(prose: &str, index: &LineIndex) -> Vec<StyleIssue> {
    let mut issues: Vec<StyleIssue> = JARGON_MATCHERS
        .iter()
        .flat_map(|(word, re)| {
            re.find_iter(prose).map(move |m| {
                issue_at(
                    index,
                    &m,
                    Severity::Info,
                    StyleCategory::Jargon,
                    format!("\"{word}\" may be unfamiliar to your target reader."),
                    Some(format!("Consider explaining or replacing \"{word}\"")),
                )
            })
        })
        .collect();
    issues.sort_by_key(|issue| issue.absolute_offset);
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_is_technical() {
        assert!(is_technical_audience(""));
        assert!(is_technical_audience("   "));
    }

    #[test]
    fn explicit_non_technical_wins() {
        assert!(!is_technical_audience("Non-technical engineers' managers"));
        assert!(!is_technical_audience("nontechnical staff"));
        assert!(!is_technical_audience("non technical readers"));
    }

    #[test]
    fn technical_markers() {
        assert!(is_technical_audience("Senior DevOps folks"));
        assert!(is_technical_audience("software architects"));
        assert!(!is_technical_audience("marketing team"));
    }

    #[test]
    fn finds_jargon_in_order() {
        let prose = "Commit the change, then use the CLI.\nAsk about DNS.";
        let index = LineIndex::new(prose);
        let issues = find_jargon(prose, &index);
        let words: Vec<_> = issues
            .iter()
            .map(|i| &prose[i.absolute_offset..i.absolute_offset + i.length])
            .collect();
        assert_eq!(words, vec!["Commit", "CLI", "DNS"]);
        assert_eq!(issues[2].line, 2);
        assert!(issues[1].message.contains("\"cli\""));
    }
}
