//! Error types for draftcheck-core.
//!
//! Analyzers themselves are total and never fail; these errors only surface at
//! the edges (configuration loading, input admission, header rewriting).

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A config file named with `--config` does not exist.
    #[error("config file not found: {0}")]
    NotFound(Utf8PathBuf),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur before or around text analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input exceeds the configured size limit.
    #[error("input is {size} bytes, which exceeds the {limit} byte limit")]
    InputTooLarge {
        /// Size of the rejected input in bytes.
        size: usize,
        /// The limit that was exceeded.
        limit: usize,
    },

    /// An unknown tool name was provided.
    #[error("unknown tool: {name}. Use: {available}")]
    UnknownTool {
        /// The tool name that was requested.
        name: String,
        /// Comma-separated list of available tool names.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors from shifting every header in a document up or down one level.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderShiftError {
    /// Promotion is impossible while an H1 exists.
    #[error("Cannot promote: H1 headers already exist and cannot go higher.")]
    TopLevelPresent,

    /// Demotion is impossible while an H6 exists.
    #[error("Cannot demote: H6 headers already exist and cannot go lower.")]
    BottomLevelPresent,
}
