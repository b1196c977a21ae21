//! Readability scoring.
//!
//! Computes three classic formulas over the markdown-stripped text:
//!
//! - Flesch reading ease: `206.835 - 1.015 * wps - 84.6 * spw` (higher is easier)
//! - Gunning Fog: `0.4 * (wps + 100 * complex / words)`
//! - Flesch-Kincaid grade: `0.39 * wps + 11.8 * spw - 15.59`, floored at 0
//!
//! where `wps` is words per sentence, `spw` syllables per word and `complex`
//! the number of words with three or more syllables.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::markdown::strip_markdown;
use crate::text::{self, round1};

/// Average adult silent reading speed, in words per minute.
const READING_WPM: f64 = 238.0;

/// Words with at least this many syllables are "complex" for Gunning Fog.
const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch reading ease, one decimal.
    pub flesch_kincaid: f64,
    /// Gunning Fog index, one decimal.
    pub gunning_fog: f64,
    /// Flesch-Kincaid grade level, one decimal, never negative.
    pub grade_level: f64,
    /// Number of words.
    pub word_count: usize,
    /// Number of sentences (at least 1).
    pub sentence_count: usize,
    /// Total estimated syllables.
    pub syllable_count: usize,
    /// Estimated reading time in minutes, two decimals.
    pub reading_time_minutes: f64,
    /// Free-text note about the intended audience, supplied by callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_note: Option<String>,
}

/// Score the readability of a document.
///
/// Never fails: a document without words scores 0 on every metric.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_readability(text: &str) -> ReadabilityReport {
    let plain = strip_markdown(text);
    let words: Vec<&str> = plain.split_whitespace().collect();
    let word_count = text::count_words(text);
    let sentence_count = text::count_sentences(text);

    let syllables: Vec<usize> = words.iter().map(|w| text::count_syllables(w)).collect();
    let syllable_count: usize = syllables.iter().sum();
    let complex_words = syllables
        .iter()
        .filter(|&&s| s >= COMPLEX_WORD_SYLLABLES)
        .count();

    if word_count == 0 {
        return ReadabilityReport {
            flesch_kincaid: 0.0,
            gunning_fog: 0.0,
            grade_level: 0.0,
            word_count,
            sentence_count,
            syllable_count,
            reading_time_minutes: 0.0,
            audience_note: None,
        };
    }

    let words_per_sentence = word_count as f64 / sentence_count as f64;
    let syllables_per_word = syllable_count as f64 / word_count as f64;
    let complex_ratio = complex_words as f64 / word_count as f64;

    let flesch_kincaid = round1(84.6f64.mul_add(
        -syllables_per_word,
        1.015f64.mul_add(-words_per_sentence, 206.835),
    ));
    let gunning_fog = round1(0.4 * 100.0f64.mul_add(complex_ratio, words_per_sentence));
    let grade_level =
        round1(0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59).max(0.0);
    let reading_time_minutes = (word_count as f64 / READING_WPM * 100.0).round() / 100.0;

    tracing::debug!(
        word_count,
        sentence_count,
        syllable_count,
        grade_level,
        "readability scored"
    );

    ReadabilityReport {
        flesch_kincaid,
        gunning_fog,
        grade_level,
        word_count,
        sentence_count,
        syllable_count,
        reading_time_minutes,
        audience_note: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "The cat sat on the mat. The dog ran in the park. It was a good day.";
    const COMPLEX: &str = "The implementation of sophisticated algorithmic methodologies \
        necessitates comprehensive understanding of fundamental computational paradigms. \
        Furthermore, the utilization of advanced data structures facilitates optimized \
        performance characteristics across heterogeneous computing environments.";

    #[test]
    fn counts_words_and_sentences() {
        let report = analyze_readability(SIMPLE);
        assert_eq!(report.word_count, 17);
        assert_eq!(report.sentence_count, 3);
        assert!(report.reading_time_minutes > 0.0);
        assert!(report.reading_time_minutes < 1.0);
    }

    #[test]
    fn simple_text_is_easy() {
        let report = analyze_readability(SIMPLE);
        assert!(report.flesch_kincaid > 60.0);
        assert!(report.gunning_fog > 0.0);
        assert!(report.grade_level >= 0.0);
    }

    #[test]
    fn complex_text_is_harder() {
        let simple = analyze_readability(SIMPLE);
        let complex = analyze_readability(COMPLEX);
        assert!(complex.flesch_kincaid < simple.flesch_kincaid);
        assert!(complex.grade_level > simple.grade_level);
        assert!(complex.gunning_fog > simple.gunning_fog);
    }

    #[test]
    fn empty_text_scores_zero() {
        let report = analyze_readability("");
        assert_eq!(report.word_count, 0);
        assert_eq!(report.sentence_count, 1);
        assert_eq!(report.reading_time_minutes, 0.0);
        assert_eq!(report.flesch_kincaid, 0.0);
        assert_eq!(report.grade_level, 0.0);
    }

    #[test]
    fn code_blocks_do_not_count() {
        let md = "# Title\n\nThe cat sat on the mat.\n\n```rust\nlet x = compute_everything();\n```";
        let report = analyze_readability(md);
        assert_eq!(report.word_count, 7);
    }

    #[test]
    fn scores_are_rounded() {
        let report = analyze_readability(COMPLEX);
        for value in [report.flesch_kincaid, report.gunning_fog, report.grade_level] {
            assert_eq!(round1(value), value);
        }
    }

    #[test]
    fn audience_note_omitted_from_json() {
        let json = serde_json::to_value(analyze_readability(SIMPLE)).unwrap();
        assert!(json.get("audience_note").is_none());
        assert_eq!(json["word_count"], 17);
    }
}
