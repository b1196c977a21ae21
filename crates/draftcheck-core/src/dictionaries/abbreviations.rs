//! Abbreviations that do not end a sentence when followed by a period.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lowercased abbreviations, without their trailing period.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Titles and honorifics
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st",
        // Latin and general shorthand
        "vs", "etc", "e.g", "i.e",
        // Organizations
        "inc", "ltd", "dept",
        // Measures and references
        "est", "approx", "fig", "vol", "no",
    ]
    .into_iter()
    .collect()
});

/// Check if a sentence-ending token is a known abbreviation.
///
/// Trailing `.`, `!` and `?` are removed and the rest is lowercased before
/// lookup, so `"Dr."`, `"etc."` and `"e.g."` all match.
pub fn is_abbreviation(token: &str) -> bool {
    let word = token
        .trim_end_matches(['.', '!', '?'])
        .to_lowercase();
    ABBREVIATIONS.contains(word.as_str())
}
