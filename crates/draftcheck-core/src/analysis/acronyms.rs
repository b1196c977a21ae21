//! Acronym expansion checking.
//!
//! An acronym counts as expanded when the document defines it somewhere,
//! either inside or right before a parenthetical, or through an "X, or ..."
//! gloss. Unexpanded acronyms are reported once, at their first use.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::LazyLock;

use regex::Regex;

use crate::markdown::mask_code_blocks;
use crate::text::LineIndex;
use crate::word_lists::ACRONYM_SKIP_LIST;

use super::reports::{AcronymIssue, AcronymReport};

static ACRONYM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("valid regex"));

/// Find acronyms that are never expanded.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_acronyms(text: &str) -> AcronymReport {
    let prose = mask_code_blocks(text);
    let index = LineIndex::new(text);

    // (acronym, occurrence offsets) in first-seen order.
    let mut found: Vec<(&str, Vec<usize>)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for m in ACRONYM_RE.find_iter(&prose) {
        let acronym = m.as_str();
        if ACRONYM_SKIP_LIST.contains(acronym) {
            continue;
        }
        match slots.entry(acronym) {
            Entry::Occupied(slot) => found[*slot.get()].1.push(m.start()),
            Entry::Vacant(slot) => {
                slot.insert(found.len());
                found.push((acronym, vec![m.start()]));
            }
        }
    }

    let mut acronyms: Vec<AcronymIssue> = found
        .iter()
        .filter(|(acronym, _)| !is_expanded(&prose, acronym))
        .map(|(acronym, offsets)| {
            let first = offsets[0];
            AcronymIssue {
                acronym: (*acronym).to_string(),
                line: index.line(first),
                absolute_offset: first,
                length: acronym.len(),
                count: offsets.len(),
                dismissed: false,
            }
        })
        .collect();
    acronyms.sort_by_key(|issue| issue.absolute_offset);

    tracing::debug!(
        found = found.len(),
        unexpanded = acronyms.len(),
        "acronym check complete"
    );

    AcronymReport {
        all_expanded: acronyms.is_empty(),
        total_acronyms_found: found.len(),
        acronyms,
    }
}

/// Whether `prose` defines `acronym` anywhere.
///
/// The three accepted forms are alternated into one pattern, so each distinct
/// acronym compiles a single regex.
fn is_expanded(prose: &str, acronym: &str) -> bool {
    let a = regex::escape(acronym);
    let pattern = [
        // "Application Programming Interface (API)"
        format!(r"\([^)]*\b{a}\b[^)]*\)"),
        // "API (Application Programming Interface)"
        format!(r"\b{a}\b\s*\([^)]+\)"),
        // "CLI, or command-line interface"
        format!(r"\b{a}\b[,\s]+or\s+[A-Za-z]"),
    ]
    .join("|");
    Regex::new(&pattern).is_ok_and(|re| re.is_match(prose))
}
