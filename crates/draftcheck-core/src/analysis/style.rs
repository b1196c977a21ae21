//! Style checking: passive voice, wordy phrases and inconsistent variants.
//!
//! Runs on code-masked prose so nothing inside code blocks is flagged, and
//! reports positions against the original document.

use std::sync::LazyLock;

use regex::{Match, Regex};

use crate::dictionaries::irregular_verbs::{BE_VERBS, IRREGULAR_PAST_PARTICIPLES};
use crate::markdown::mask_code_blocks;
use crate::text::{LineIndex, whole_word};
use crate::word_lists::{TERM_GROUPS, US_UK_PAIRS, WORDY_PHRASES};

use super::jargon;
use super::reports::{Severity, StyleCategory, StyleCheckReport, StyleIssue};

/// Options for [`check_style_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleOptions {
    /// Flag technical jargon when the reader context is non-technical.
    pub flag_jargon: bool,
}

/// A be-verb followed by an `-ed` word or a common irregular participle.
///
/// The `-ed` test is purely lexical, so short adjectives like "red" and "bed"
/// after a be-verb are reported as passive too.
static PASSIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b({})\s+(\w+ed|{})\b",
        BE_VERBS.join("|"),
        IRREGULAR_PAST_PARTICIPLES.join("|")
    ))
    .expect("valid regex")
});

static WORDY_MATCHERS: LazyLock<Vec<(Regex, &'static str, &'static str)>> = LazyLock::new(|| {
    WORDY_PHRASES
        .iter()
        .map(|&(phrase, suggestion)| (whole_word(phrase), phrase, suggestion))
        .collect()
});

/// One matcher per variant, grouped as in the source table.
type VariantGroups = Vec<Vec<(&'static str, Regex)>>;

static SPELLING_MATCHERS: LazyLock<VariantGroups> = LazyLock::new(|| {
    US_UK_PAIRS
        .iter()
        .map(|pair| pair.iter().map(|&v| (v, whole_word(v))).collect())
        .collect()
});

static TERM_MATCHERS: LazyLock<VariantGroups> = LazyLock::new(|| {
    TERM_GROUPS
        .iter()
        .map(|group| group.iter().map(|&v| (v, whole_word(v))).collect())
        .collect()
});

/// Check style with default options (no jargon detection).
pub fn check_style(text: &str, reader_context: &str) -> StyleCheckReport {
    check_style_with(text, reader_context, &StyleOptions::default())
}

/// Check style.
///
/// Issues are grouped by check in a fixed order: passive voice, wordiness,
/// spelling inconsistency, terminology inconsistency, then jargon.
/// `reader_context` only matters when [`StyleOptions::flag_jargon`] is set.
#[tracing::instrument(skip_all, fields(text_len = text.len(), flag_jargon = options.flag_jargon))]
pub fn check_style_with(
    text: &str,
    reader_context: &str,
    options: &StyleOptions,
) -> StyleCheckReport {
    let prose = mask_code_blocks(text);
    let index = LineIndex::new(text);
    let mut issues = Vec::new();

    for m in PASSIVE_RE.find_iter(&prose) {
        issues.push(issue_at(
            &index,
            &m,
            Severity::Warning,
            StyleCategory::PassiveVoice,
            format!(
                "Passive voice: \"{}\". Consider rewriting in active voice.",
                m.as_str()
            ),
            None,
        ));
    }

    for (re, phrase, suggestion) in WORDY_MATCHERS.iter() {
        for m in re.find_iter(&prose) {
            issues.push(issue_at(
                &index,
                &m,
                Severity::Info,
                StyleCategory::Wordiness,
                format!("Wordy: \"{phrase}\" can be simplified."),
                Some(suggestion.to_string()),
            ));
        }
    }

    for group in SPELLING_MATCHERS.iter() {
        variant_issues(&prose, &index, group, "spelling", &mut issues);
    }
    for group in TERM_MATCHERS.iter() {
        variant_issues(&prose, &index, group, "terminology", &mut issues);
    }

    if options.flag_jargon && !jargon::is_technical_audience(reader_context) {
        issues.extend(jargon::find_jargon(&prose, &index));
    }

    tracing::debug!(issues = issues.len(), "style check complete");
    StyleCheckReport { issues }
}

/// Flag every occurrence of the non-dominant variants of one group.
///
/// Nothing is flagged unless at least two variants occur. The dominant
/// variant has the highest count; ties go to the earlier table entry.
fn variant_issues(
    prose: &str,
    index: &LineIndex,
    group: &[(&'static str, Regex)],
    label: &str,
    issues: &mut Vec<StyleIssue>,
) {
    let found: Vec<(&str, Vec<Match<'_>>)> = group
        .iter()
        .map(|(variant, re)| (*variant, re.find_iter(prose).collect::<Vec<_>>()))
        .collect();

    if found.iter().filter(|(_, hits)| !hits.is_empty()).count() < 2 {
        return;
    }

    let mut dominant = 0;
    for (i, (_, hits)) in found.iter().enumerate() {
        if hits.len() > found[dominant].1.len() {
            dominant = i;
        }
    }
    let dominant_variant = found[dominant].0;

    for (i, (variant, hits)) in found.iter().enumerate() {
        if i == dominant {
            continue;
        }
        for m in hits {
            issues.push(issue_at(
                index,
                m,
                Severity::Info,
                StyleCategory::Inconsistency,
                format!(
                    "Inconsistent {label}: \"{variant}\" appears alongside the more common \"{dominant_variant}\"."
                ),
                Some(dominant_variant.to_string()),
            ));
        }
    }
}

/// Build an issue spanning a regex match.
pub(super) fn issue_at(
    index: &LineIndex,
    m: &Match<'_>,
    severity: Severity,
    category: StyleCategory,
    message: String,
    suggestion: Option<String>,
) -> StyleIssue {
    let (line, column) = index.locate(m.start());
    StyleIssue {
        severity,
        category,
        message,
        line,
        column,
        absolute_offset: m.start(),
        length: m.len(),
        suggestion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn of(report: &StyleCheckReport, category: StyleCategory) -> Vec<&StyleIssue> {
        report
            .issues
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    #[test]
    fn flags_passive_voice() {
        let report = check_style("The report was written by the team.", "");
        let passive = of(&report, StyleCategory::PassiveVoice);
        assert_eq!(passive.len(), 1);
        assert_eq!(passive[0].severity, Severity::Warning);
        assert!(passive[0].message.contains("was written"));
    }

    #[test]
    fn active_voice_is_clean() {
        let report = check_style("The team wrote a clear report.", "");
        assert!(report.issues.is_empty());
    }

    #[test]
    fn passive_on_later_line_has_position() {
        let text = "Line one is fine.\nThe report was written by the team.";
        let report = check_style(text, "");
        let passive = of(&report, StyleCategory::PassiveVoice);
        assert_eq!(passive[0].line, 2);
        assert_eq!(passive[0].absolute_offset, text.find("was written").unwrap());
        assert_eq!(passive[0].column, "The report ".len());
        assert_eq!(passive[0].length, "was written".len());
    }

    #[test]
    fn flags_wordy_phrases_with_suggestions() {
        let report = check_style("In order to improve, we should utilize this.", "");
        let wordy = of(&report, StyleCategory::Wordiness);
        assert_eq!(wordy.len(), 2);
        assert!(wordy[0].message.contains("in order to"));
        assert_eq!(wordy[0].suggestion.as_deref(), Some("to"));
        assert_eq!(wordy[1].suggestion.as_deref(), Some("use"));
    }

    #[test]
    fn mixed_spelling_tie_prefers_first_variant() {
        let report = check_style("The color of the colour was nice.", "");
        let issues = of(&report, StyleCategory::Inconsistency);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Info);
        assert_eq!(issues[0].suggestion.as_deref(), Some("color"));
    }

    #[test]
    fn single_variant_is_not_flagged() {
        let report = check_style("The color was red. Another color was blue.", "");
        assert!(of(&report, StyleCategory::Inconsistency).is_empty());
    }

    #[test]
    fn minority_spelling_is_flagged() {
        let report = check_style(
            "We organize things. We organize more. We organise here.",
            "",
        );
        let issues = of(&report, StyleCategory::Inconsistency);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("organise"));
        assert_eq!(issues[0].suggestion.as_deref(), Some("organize"));
    }

    #[test]
    fn uk_majority_wins() {
        let report = check_style("The centre is nice. The centre is big. Visit the center.", "");
        let issues = of(&report, StyleCategory::Inconsistency);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("center"));
        assert_eq!(issues[0].suggestion.as_deref(), Some("centre"));
    }

    #[test]
    fn dominant_color_spelling() {
        let report = check_style(
            "The color was red. The color was blue. The colour was green.",
            "",
        );
        let issues = of(&report, StyleCategory::Inconsistency);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].suggestion.as_deref(), Some("color"));
    }

    #[test]
    fn terminology_positions() {
        let text = "The user is here.\nThe customer is there.";
        let report = check_style(text, "");
        let issue = of(&report, StyleCategory::Inconsistency)
            .into_iter()
            .find(|i| i.message.contains("customer"))
            .unwrap();
        assert_eq!(issue.line, 2);
        assert_eq!(issue.absolute_offset, text.find("customer").unwrap());
        assert_eq!(issue.suggestion.as_deref(), Some("user"));
    }

    #[test]
    fn dominant_term() {
        let report = check_style(
            "The user did this. The user did that. The customer arrived.",
            "",
        );
        let issues = of(&report, StyleCategory::Inconsistency);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].suggestion.as_deref(), Some("user"));
    }

    #[test]
    fn code_is_skipped() {
        let text = "Good prose here.\n```\nThe report was written by the team.\nIn order to start, utilize this.\n```\nMore prose.";
        assert!(check_style(text, "").issues.is_empty());

        let text = "I like the color red.\n```\nconst colour = \"blue\"\n```\nThe color is nice.";
        assert!(of(&check_style(text, ""), StyleCategory::Inconsistency).is_empty());

        let text = "Run `was created` here.";
        assert!(check_style(text, "").issues.is_empty());
    }

    #[test]
    fn issues_grouped_by_check() {
        let text = "In order to win, the colour was changed. The color is set. The color stays.";
        let report = check_style(text, "");
        let categories: Vec<_> = report.issues.iter().map(|i| i.category).collect();
        assert_eq!(
            categories,
            vec![
                StyleCategory::PassiveVoice,
                StyleCategory::Wordiness,
                StyleCategory::Inconsistency,
            ]
        );
    }

    #[test]
    fn spans_slice_the_original() {
        use StyleCategory::*;

        let text = "Café notes: we leverage the colour.\nThe color is set.\n\n\
                    Later the color was picked.\n```\nleverage\n```\nDeploy it.";
        let options = StyleOptions { flag_jargon: true };
        let report = check_style_with(text, "non-technical readers", &options);

        let spans: Vec<(StyleCategory, usize, &str)> = report
            .issues
            .iter()
            .map(|i| {
                (
                    i.category,
                    i.line,
                    &text[i.absolute_offset..i.absolute_offset + i.length],
                )
            })
            .collect();
        assert_eq!(
            spans,
            vec![
                (PassiveVoice, 4, "was picked"),
                (Wordiness, 1, "leverage"),
                (Inconsistency, 1, "colour"),
                (Jargon, 8, "Deploy"),
            ]
        );

        // Columns are byte distances, so the two-byte "é" shifts them by one.
        assert_eq!(report.issues[0].column, "Later the ".len());
        assert_eq!(report.issues[1].column, "Café notes: we ".len());
        assert_eq!(report.issues[1].column, 16);
    }

    #[test]
    fn short_ed_adjectives_read_as_passive() {
        let report = check_style("The color was red.", "");
        let passive = of(&report, StyleCategory::PassiveVoice);
        assert_eq!(passive.len(), 1);
        assert!(passive[0].message.contains("was red"));
    }

    #[test]
    fn jargon_off_by_default() {
        let report = check_style("Deploy the API to the pipeline.", "non-technical managers");
        assert!(of(&report, StyleCategory::Jargon).is_empty());
    }

    #[test]
    fn jargon_when_enabled_for_lay_readers() {
        let options = StyleOptions { flag_jargon: true };
        let report = check_style_with(
            "Deploy the API to the pipeline.",
            "non-technical managers",
            &options,
        );
        let jargon = of(&report, StyleCategory::Jargon);
        assert_eq!(jargon.len(), 3);
        assert_eq!(jargon[0].absolute_offset, 0);

        let technical = check_style_with("Deploy the API.", "backend developers", &options);
        assert!(of(&technical, StyleCategory::Jargon).is_empty());
    }

    #[test]
    fn deterministic() {
        let text = "The colour was set. The color was set. In order to go, utilize it.";
        assert_eq!(check_style(text, ""), check_style(text, ""));
    }
}
