//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod acronyms;
pub mod analyze;
pub mod headers;
pub mod hedges;
pub mod info;
pub mod parallel;
pub mod pronouns;
pub mod readability;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod style;

/// Read a file and validate its size against the configured limit.
///
/// The size is checked from metadata, so an oversized file is never read
/// into memory.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        draftcheck_core::validate_input_size(size, max)
            .with_context(|| format!("refusing to analyze {path}"))?;
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Print a report as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(report: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
