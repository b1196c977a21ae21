//! Document analyzers and tool dispatch.
//!
//! Each analyzer is a pure function from document text to a report, in its
//! own module. [`ToolId`] names them and [`run_tool`] / [`run_tools`]
//! dispatch by name.

pub mod acronyms;
pub mod headers;
pub mod hedges;
pub mod jargon;
pub mod parallel;
pub mod pronouns;
pub mod reports;
pub mod style;

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use acronyms::check_acronyms;
pub use headers::{demote_headers, promote_headers, scan_headers};
pub use hedges::analyze_hedge_words;
pub use jargon::is_technical_audience;
pub use parallel::check_parallel_structure;
pub use pronouns::analyze_pronouns;
pub use reports::*;
pub use style::{StyleOptions, check_style, check_style_with};

use crate::error::AnalysisError;
use crate::readability::{ReadabilityReport, analyze_readability};

/// The analyzers a caller can request by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ToolId {
    /// Readability scores.
    Readability,
    /// Passive voice, wordiness and inconsistency.
    StyleCheck,
    /// First- and second-person pronouns.
    Pronouns,
    /// Hedging vocabulary.
    HedgeWords,
    /// Unexpanded acronyms.
    AcronymChecker,
    /// List parallelism.
    ParallelStructure,
    /// Header level counts.
    HeaderShift,
}

impl ToolId {
    /// Every tool, in dispatch order.
    pub const ALL: [Self; 7] = [
        Self::Readability,
        Self::StyleCheck,
        Self::Pronouns,
        Self::HedgeWords,
        Self::AcronymChecker,
        Self::ParallelStructure,
        Self::HeaderShift,
    ];

    /// Returns the kebab-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Readability => "readability",
            Self::StyleCheck => "style-check",
            Self::Pronouns => "pronouns",
            Self::HedgeWords => "hedge-words",
            Self::AcronymChecker => "acronym-checker",
            Self::ParallelStructure => "parallel-structure",
            Self::HeaderShift => "header-shift",
        }
    }

    /// Comma-separated list of every tool name.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| AnalysisError::UnknownTool {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}

/// The report of a single tool, tagged by tool name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ToolResult {
    /// See [`analyze_readability`].
    Readability(ReadabilityReport),
    /// See [`check_style_with`].
    StyleCheck(StyleCheckReport),
    /// See [`analyze_pronouns`].
    Pronouns(PronounReport),
    /// See [`analyze_hedge_words`].
    HedgeWords(HedgeWordReport),
    /// See [`check_acronyms`].
    AcronymChecker(AcronymReport),
    /// See [`check_parallel_structure`].
    ParallelStructure(ParallelStructureReport),
    /// See [`scan_headers`].
    HeaderShift(HeaderShiftReport),
}

impl ToolResult {
    /// The tool that produced this result.
    pub const fn tool(&self) -> ToolId {
        match self {
            Self::Readability(_) => ToolId::Readability,
            Self::StyleCheck(_) => ToolId::StyleCheck,
            Self::Pronouns(_) => ToolId::Pronouns,
            Self::HedgeWords(_) => ToolId::HedgeWords,
            Self::AcronymChecker(_) => ToolId::AcronymChecker,
            Self::ParallelStructure(_) => ToolId::ParallelStructure,
            Self::HeaderShift(_) => ToolId::HeaderShift,
        }
    }
}

/// Run one tool over `text`.
///
/// `reader_context` and `style` only affect [`ToolId::StyleCheck`].
pub fn run_tool(tool: ToolId, text: &str, reader_context: &str, style: &StyleOptions) -> ToolResult {
    match tool {
        ToolId::Readability => ToolResult::Readability(analyze_readability(text)),
        ToolId::StyleCheck => ToolResult::StyleCheck(check_style_with(text, reader_context, style)),
        ToolId::Pronouns => ToolResult::Pronouns(analyze_pronouns(text)),
        ToolId::HedgeWords => ToolResult::HedgeWords(analyze_hedge_words(text)),
        ToolId::AcronymChecker => ToolResult::AcronymChecker(check_acronyms(text)),
        ToolId::ParallelStructure => {
            ToolResult::ParallelStructure(check_parallel_structure(text))
        }
        ToolId::HeaderShift => ToolResult::HeaderShift(scan_headers(text)),
    }
}

/// Run a set of tools (all of them when `tools` is `None`) into one report.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn run_tools(
    tools: Option<&[ToolId]>,
    text: &str,
    reader_context: &str,
    style: &StyleOptions,
) -> DocumentReport {
    let tools = tools.unwrap_or(&ToolId::ALL);
    let mut report = DocumentReport::default();
    for &tool in tools {
        match run_tool(tool, text, reader_context, style) {
            ToolResult::Readability(r) => report.readability = Some(r),
            ToolResult::StyleCheck(r) => report.style_check = Some(r),
            ToolResult::Pronouns(r) => report.pronouns = Some(r),
            ToolResult::HedgeWords(r) => report.hedge_words = Some(r),
            ToolResult::AcronymChecker(r) => report.acronym_checker = Some(r),
            ToolResult::ParallelStructure(r) => report.parallel_structure = Some(r),
            ToolResult::HeaderShift(r) => report.header_shift = Some(r),
        }
    }
    tracing::debug!(tools = tools.len(), "tools run");
    report
}
