//! Report structs for the document analyzers.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses. Offsets are UTF-8 byte
//! offsets into the original (unmasked) document.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::ReadabilityReport;

/// Results of several analyzers over one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentReport {
    /// Readability scores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityReport>,
    /// Style issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_check: Option<StyleCheckReport>,
    /// Pronoun usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<PronounReport>,
    /// Hedge-word usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hedge_words: Option<HedgeWordReport>,
    /// Unexpanded acronyms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acronym_checker: Option<AcronymReport>,
    /// List parallelism.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_structure: Option<ParallelStructureReport>,
    /// Header level counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_shift: Option<HeaderShiftReport>,
}

// -- Style -------------------------------------------------------------------

/// How strongly a style issue should be weighed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Likely worth fixing.
    Warning,
    /// A suggestion.
    Info,
}

/// Which style check produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StyleCategory {
    /// A be-verb followed by a past participle.
    PassiveVoice,
    /// A phrase with a shorter equivalent.
    Wordiness,
    /// A minority spelling or term variant.
    Inconsistency,
    /// Technical vocabulary aimed at a non-technical reader.
    Jargon,
}

/// A single style finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleIssue {
    /// Issue severity.
    pub severity: Severity,
    /// Check that produced the issue.
    pub category: StyleCategory,
    /// Human-readable description.
    pub message: String,
    /// 1-based line of the flagged text.
    pub line: usize,
    /// Byte offset of the flagged text within its line.
    pub column: usize,
    /// Byte offset of the flagged text within the document.
    pub absolute_offset: usize,
    /// Byte length of the flagged text.
    pub length: usize,
    /// Suggested replacement, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Style check results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleCheckReport {
    /// Issues grouped by check: passive voice, wordiness, inconsistency, jargon.
    pub issues: Vec<StyleIssue>,
}

// -- Pronouns ----------------------------------------------------------------

/// Tracked pronoun group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PronounGroup {
    /// i, me, my, mine
    I,
    /// you, your, yours
    You,
    /// we, us, our, ours
    We,
}

/// A pronoun occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PronounMatch {
    /// Start byte offset.
    pub from: usize,
    /// End byte offset (exclusive).
    pub to: usize,
    /// Group the matched form belongs to.
    pub group: PronounGroup,
}

/// Per-group tallies, used for both counts and percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PronounCounts {
    /// First person singular.
    pub i: usize,
    /// Second person.
    pub you: usize,
    /// First person plural.
    pub we: usize,
}

/// Pronoun usage results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PronounReport {
    /// Occurrences per group.
    pub counts: PronounCounts,
    /// Total occurrences.
    pub total: usize,
    /// Rounded share of `total` per group.
    pub percentages: PronounCounts,
    /// One-line description of the tone.
    pub tone_assessment: String,
    /// Every occurrence, sorted by `from`.
    pub matches: Vec<PronounMatch>,
}

// -- Hedge words -------------------------------------------------------------

/// Hedge vocabulary group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HedgeGroup {
    /// might, could, perhaps, ...
    Uncertainty,
    /// usually, often, sometimes, ...
    Frequency,
    /// somewhat, fairly, quite, ...
    Softener,
}

/// A hedge-word occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HedgeMatch {
    /// Start byte offset.
    pub from: usize,
    /// End byte offset (exclusive).
    pub to: usize,
    /// The matched word, lowercased.
    pub word: String,
    /// Group the word belongs to.
    pub group: HedgeGroup,
    /// 1-based line number.
    pub line: usize,
    /// Whether a reviewer dismissed the match. Always `false` from the analyzer.
    pub dismissed: bool,
}

/// Per-group hedge tallies, used for both counts and percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HedgeCounts {
    /// Uncertainty hedges.
    pub uncertainty: usize,
    /// Frequency hedges.
    pub frequency: usize,
    /// Softeners.
    pub softener: usize,
}

/// Hedge-word usage results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HedgeWordReport {
    /// Every occurrence, sorted by `from`.
    pub matches: Vec<HedgeMatch>,
    /// Occurrences per group.
    pub counts: HedgeCounts,
    /// Total occurrences.
    pub total: usize,
    /// Whitespace-separated words in the prose outside code.
    pub word_count: usize,
    /// Rounded share of `total` per group.
    pub percentages: HedgeCounts,
    /// Hedges per hundred words.
    pub density: f64,
    /// One-line description of the tone.
    pub tone_assessment: String,
}

// -- Acronyms ----------------------------------------------------------------

/// An acronym used without an expansion anywhere in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AcronymIssue {
    /// The acronym.
    pub acronym: String,
    /// 1-based line of the first occurrence.
    pub line: usize,
    /// Byte offset of the first occurrence.
    pub absolute_offset: usize,
    /// Byte length of the acronym.
    pub length: usize,
    /// Number of occurrences.
    pub count: usize,
    /// Whether a reviewer dismissed the issue. Always `false` from the analyzer.
    pub dismissed: bool,
}

/// Acronym check results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AcronymReport {
    /// Unexpanded acronyms, sorted by first occurrence.
    pub acronyms: Vec<AcronymIssue>,
    /// Distinct acronyms found, expanded or not.
    pub total_acronyms_found: usize,
    /// `true` when no acronym is missing an expansion.
    pub all_expanded: bool,
}

// -- Parallel structure ------------------------------------------------------

/// Grammatical shape of a list item's opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ListItemPattern {
    /// "to" + verb: "To install the tool".
    Infinitive,
    /// -ing word: "Installing the tool".
    Gerund,
    /// Bare verb: "Install the tool".
    Imperative,
    /// Determiner: "The installed tool".
    NounPhrase,
    /// Subject + verb: "Users install the tool".
    Sentence,
    /// Anything else.
    Other,
}

impl ListItemPattern {
    /// Returns the kebab-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Infinitive => "infinitive",
            Self::Gerund => "gerund",
            Self::Imperative => "imperative",
            Self::NounPhrase => "noun-phrase",
            Self::Sentence => "sentence",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ListItemPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParallelStructureItem {
    /// 1-based line number.
    pub line: usize,
    /// Item text after the list marker.
    pub text: String,
    /// Byte offset of `text` within the document.
    pub absolute_offset: usize,
    /// Grammatical pattern of the opening words.
    pub pattern: ListItemPattern,
    /// Whether the first character is an ASCII capital.
    pub capitalized: bool,
    /// Final `.`, `;` or `:`, or empty.
    pub trailing_punctuation: String,
}

/// A run of consecutive list items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParallelStructureList {
    /// Line of the first item.
    pub start_line: usize,
    /// Items in document order.
    pub items: Vec<ParallelStructureItem>,
    /// Majority pattern.
    pub dominant_pattern: ListItemPattern,
    /// Majority capitalization.
    pub dominant_capitalization: bool,
    /// Majority trailing punctuation.
    pub dominant_punctuation: String,
    /// `false` when any item was flagged.
    pub is_consistent: bool,
}

/// Which dimension of a list item disagrees with its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParallelIssueKind {
    /// Grammatical pattern differs.
    Pattern,
    /// Capitalization differs.
    Capitalization,
    /// Trailing punctuation differs.
    Punctuation,
}

/// A list item that breaks parallelism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParallelStructureIssue {
    /// Index into [`ParallelStructureReport::lists`].
    pub list_index: usize,
    /// Index into the list's items.
    pub item_index: usize,
    /// 1-based line of the item.
    pub item_line: usize,
    /// Byte offset of the item text.
    pub item_absolute_offset: usize,
    /// Byte length of the item text.
    pub item_length: usize,
    /// Dimension that differs.
    pub kind: ParallelIssueKind,
    /// Human-readable description.
    pub message: String,
}

/// Parallel-structure results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParallelStructureReport {
    /// Every list found.
    pub lists: Vec<ParallelStructureList>,
    /// Issues across all lists.
    pub issues: Vec<ParallelStructureIssue>,
}

// -- Headers -----------------------------------------------------------------

/// Header counts per level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HeaderShiftReport {
    /// Count per level; keys 1 through 6 are always present.
    pub header_counts: BTreeMap<u8, usize>,
    /// Sum of all counts.
    pub total_headers: usize,
}

/// A document with every header moved one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HeaderShift {
    /// The rewritten document.
    pub content: String,
    /// Number of header lines changed.
    pub shifted: usize,
}
