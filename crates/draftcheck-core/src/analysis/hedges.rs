//! Hedge-word analysis: uncertainty, frequency and softening vocabulary.

use std::sync::LazyLock;

use regex::Regex;

use crate::markdown::mask_code_blocks;
use crate::text::{LineIndex, percent, whole_word};
use crate::word_lists::{HEDGE_FREQUENCY, HEDGE_SOFTENER, HEDGE_UNCERTAINTY};

use super::reports::{HedgeCounts, HedgeGroup, HedgeMatch, HedgeWordReport};

static HEDGE_MATCHERS: LazyLock<Vec<(HedgeGroup, Regex)>> = LazyLock::new(|| {
    [
        (HedgeGroup::Uncertainty, HEDGE_UNCERTAINTY),
        (HedgeGroup::Frequency, HEDGE_FREQUENCY),
        (HedgeGroup::Softener, HEDGE_SOFTENER),
    ]
    .into_iter()
    .flat_map(|(group, words)| words.iter().map(move |w| (group, whole_word(w))))
    .collect()
});

/// Find hedge words outside code and measure their density.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_hedge_words(text: &str) -> HedgeWordReport {
    let prose = mask_code_blocks(text);
    let index = LineIndex::new(text);

    let mut matches: Vec<HedgeMatch> = HEDGE_MATCHERS
        .iter()
        .flat_map(|(group, re)| {
            let index = &index;
            re.find_iter(&prose).map(move |m| HedgeMatch {
                from: m.start(),
                to: m.end(),
                word: m.as_str().to_lowercase(),
                group: *group,
                line: index.line(m.start()),
                dismissed: false,
            })
        })
        .collect();
    matches.sort_by_key(|m| m.from);

    let mut counts = HedgeCounts::default();
    for m in &matches {
        match m.group {
            HedgeGroup::Uncertainty => counts.uncertainty += 1,
            HedgeGroup::Frequency => counts.frequency += 1,
            HedgeGroup::Softener => counts.softener += 1,
        }
    }

    let total = matches.len();
    let word_count = prose.split_whitespace().count();
    let percentages = HedgeCounts {
        uncertainty: percent(counts.uncertainty, total),
        frequency: percent(counts.frequency, total),
        softener: percent(counts.softener, total),
    };
    let density = if word_count == 0 {
        0.0
    } else {
        total as f64 * 100.0 / word_count as f64
    };

    tracing::debug!(total, word_count, density, "hedge words counted");

    HedgeWordReport {
        matches,
        counts,
        total,
        word_count,
        percentages,
        density,
        tone_assessment: assess_tone(density).to_string(),
    }
}

fn assess_tone(density: f64) -> &'static str {
    if density == 0.0 {
        "Fully assertive: no hedging language detected."
    } else if density < 1.0 {
        "Assertive tone with minimal hedging."
    } else if density <= 3.0 {
        "Balanced tone with moderate hedging."
    } else if density <= 5.0 {
        "Cautious tone with noticeable hedging throughout."
    } else {
        "Heavily hedged: hedging language may undermine confidence."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_each_group() {
        let report =
            analyze_hedge_words("This might work. It usually does. It is somewhat slow.");
        assert_eq!(
            report.counts,
            HedgeCounts {
                uncertainty: 1,
                frequency: 1,
                softener: 1
            }
        );
        assert_eq!(report.total, 3);
        assert_eq!(report.percentages.uncertainty, 33);
    }

    #[test]
    fn matches_sorted_lowercased_and_located() {
        let text = "Quite often\nit MIGHT fail.";
        let report = analyze_hedge_words(text);
        let words: Vec<_> = report.matches.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["quite", "often", "might"]);
        assert_eq!(report.matches[2].line, 2);
        assert!(report.matches.iter().all(|m| !m.dismissed));
        for m in &report.matches {
            assert_eq!(text[m.from..m.to].to_lowercase(), m.word);
        }
    }

    #[test]
    fn whole_words_only() {
        let report = analyze_hedge_words("Mayday! The rather-long mayor.");
        assert_eq!(report.total, 1);
        assert_eq!(report.matches[0].word, "rather");
    }

    #[test]
    fn code_is_ignored() {
        let text = "Run it.\n```\nthis might fail\n```\nUse `maybe_perhaps` too.";
        assert_eq!(analyze_hedge_words(text).total, 0);
    }

    #[test]
    fn density_and_tone() {
        let empty = analyze_hedge_words("");
        assert_eq!(empty.density, 0.0);
        assert_eq!(empty.word_count, 0);
        assert!(empty.tone_assessment.starts_with("Fully assertive"));

        let heavy = analyze_hedge_words("Perhaps it could possibly work.");
        assert_eq!(heavy.word_count, 5);
        assert_eq!(heavy.density, 60.0);
        assert!(heavy.tone_assessment.starts_with("Heavily hedged"));

        let mut text = String::from("might ");
        text.push_str(&"word ".repeat(49));
        let balanced = analyze_hedge_words(&text);
        assert_eq!(balanced.density, 2.0);
        assert!(balanced.tone_assessment.starts_with("Balanced"));
    }

    #[test]
    fn tone_thresholds() {
        assert!(assess_tone(0.5).starts_with("Assertive"));
        assert!(assess_tone(3.0).starts_with("Balanced"));
        assert!(assess_tone(4.0).starts_with("Cautious"));
        assert!(assess_tone(5.0).starts_with("Cautious"));
        assert!(assess_tone(5.1).starts_with("Heavily"));
    }
}
