//! Verb forms for passive-voice detection.

/// Forms of "to be" that can introduce a passive construction.
pub const BE_VERBS: &[&str] = &["was", "were", "is", "are", "been", "being", "be"];

/// Irregular past participles recognized after a be-verb.
///
/// Regular participles are caught by an `-ed` suffix; this list covers the
/// common irregular forms that suffix misses.
pub const IRREGULAR_PAST_PARTICIPLES: &[&str] = &[
    "written", "built", "made", "done", "seen", "given", "taken", "found", "known", "shown",
    "told", "sent", "kept", "left",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participles_do_not_overlap_regular_suffix() {
        assert!(IRREGULAR_PAST_PARTICIPLES.iter().all(|p| !p.ends_with("ed")));
    }

    #[test]
    fn be_verbs_are_lowercase() {
        assert!(BE_VERBS.iter().all(|v| v.chars().all(|c| c.is_ascii_lowercase())));
    }
}
