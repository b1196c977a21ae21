//! ATX header scanning and level shifting.

use std::collections::BTreeMap;

use crate::error::HeaderShiftError;
use crate::markdown::heading_level;

use super::reports::{HeaderShift, HeaderShiftReport};

/// Count header lines per level.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn scan_headers(text: &str) -> HeaderShiftReport {
    let mut header_counts: BTreeMap<u8, usize> = (1..=6).map(|level| (level, 0)).collect();
    for level in text.split('\n').filter_map(heading_level) {
        *header_counts.entry(level).or_default() += 1;
    }
    let total_headers = header_counts.values().sum();
    tracing::debug!(total_headers, "headers scanned");
    HeaderShiftReport {
        header_counts,
        total_headers,
    }
}

/// Move every header up one level (`##` becomes `#`).
///
/// # Errors
///
/// Returns [`HeaderShiftError::TopLevelPresent`] if the document has an H1.
pub fn promote_headers(text: &str) -> Result<HeaderShift, HeaderShiftError> {
    if text.split('\n').any(|line| heading_level(line) == Some(1)) {
        return Err(HeaderShiftError::TopLevelPresent);
    }
    Ok(shift(text, |line| line[1..].to_string()))
}

/// Move every header down one level (`#` becomes `##`).
///
/// # Errors
///
/// Returns [`HeaderShiftError::BottomLevelPresent`] if the document has an H6.
pub fn demote_headers(text: &str) -> Result<HeaderShift, HeaderShiftError> {
    if text.split('\n').any(|line| heading_level(line) == Some(6)) {
        return Err(HeaderShiftError::BottomLevelPresent);
    }
    Ok(shift(text, |line| format!("#{line}")))
}

fn shift(text: &str, rewrite: impl Fn(&str) -> String) -> HeaderShift {
    let mut shifted = 0;
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            if heading_level(line).is_some() {
                shifted += 1;
                rewrite(line)
            } else {
                line.to_string()
            }
        })
        .collect();
    tracing::debug!(shifted, "headers shifted");
    HeaderShift {
        content: lines.join("\n"),
        shifted,
    }
}
