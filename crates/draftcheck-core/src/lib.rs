//! Core library for draftcheck.
//!
//! Deterministic analyzers for markdown drafts: readability, style, pronoun
//! and hedge-word usage, acronym expansion, list parallelism and header
//! levels. Every analyzer is a pure function from text to a serializable
//! report.
//!
//! # Modules
//!
//! - [`analysis`] - Analyzers, report types and tool dispatch
//! - [`readability`] - Readability scores
//! - [`text`] - Word, sentence and syllable counting
//! - [`markdown`] - Markdown stripping and code masking
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use draftcheck_core::{ToolId, StyleOptions, run_tools};
//!
//! let doc = "# Notes\n\nYou might want to utilize the CLI.";
//! let report = run_tools(Some(&[ToolId::HedgeWords]), doc, "", &StyleOptions::default());
//!
//! assert_eq!(report.hedge_words.map(|r| r.total), Some(1));
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod markdown;
pub mod readability;
pub mod text;
pub mod word_lists;

pub use analysis::{
    DocumentReport, StyleOptions, ToolId, ToolResult, analyze_hedge_words, analyze_pronouns,
    check_acronyms, check_parallel_structure, check_style, check_style_with, demote_headers,
    promote_headers, run_tool, run_tools, scan_headers,
};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult, HeaderShiftError};
pub use readability::{ReadabilityReport, analyze_readability};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Reject input larger than `limit` bytes.
///
/// # Errors
///
/// Returns [`AnalysisError::InputTooLarge`] when `len` exceeds `limit`.
pub fn validate_input_size(len: usize, limit: usize) -> AnalysisResult<()> {
    if len > limit {
        return Err(AnalysisError::InputTooLarge { size: len, limit });
    }
    Ok(())
}
