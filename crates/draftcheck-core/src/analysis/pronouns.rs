//! First- and second-person pronoun analysis.
//!
//! Measures whether a document talks about its author ("I", "we") or to its
//! reader ("you"). Runs on the raw text, code included.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::percent;

use super::reports::{PronounCounts, PronounGroup, PronounMatch, PronounReport};

static PRONOUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(i|me|my|mine|you|your|yours|we|us|our|ours)\b").expect("valid regex")
});

fn group_of(form: &str) -> Option<PronounGroup> {
    match form.to_ascii_lowercase().as_str() {
        "i" | "me" | "my" | "mine" => Some(PronounGroup::I),
        "you" | "your" | "yours" => Some(PronounGroup::You),
        "we" | "us" | "our" | "ours" => Some(PronounGroup::We),
        _ => None,
    }
}

/// Count first- and second-person pronouns and assess tone.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_pronouns(text: &str) -> PronounReport {
    let matches: Vec<PronounMatch> = PRONOUN_RE
        .find_iter(text)
        .filter_map(|m| {
            group_of(m.as_str()).map(|group| PronounMatch {
                from: m.start(),
                to: m.end(),
                group,
            })
        })
        .collect();

    let mut counts = PronounCounts::default();
    for m in &matches {
        match m.group {
            PronounGroup::I => counts.i += 1,
            PronounGroup::You => counts.you += 1,
            PronounGroup::We => counts.we += 1,
        }
    }
    let total = matches.len();
    let percentages = PronounCounts {
        i: percent(counts.i, total),
        you: percent(counts.you, total),
        we: percent(counts.we, total),
    };

    PronounReport {
        counts,
        total,
        percentages,
        tone_assessment: assess_tone(&counts, total).to_string(),
        matches,
    }
}

fn assess_tone(counts: &PronounCounts, total: usize) -> &'static str {
    if total == 0 {
        return "No pronouns detected: neutral, impersonal tone.";
    }
    let author = (counts.i + counts.we) as f64 / total as f64 * 100.0;
    let reader = counts.you as f64 / total as f64 * 100.0;

    if reader > 50.0 {
        "Strongly reader-focused tone. Addresses the reader directly."
    } else if reader > author {
        "Mostly reader-focused tone."
    } else if author > 50.0 {
        "Strongly author-focused tone. Centered on the writer or team."
    } else if author > reader {
        "Mostly author-focused tone."
    } else {
        "Balanced tone between author and reader."
    }
}
