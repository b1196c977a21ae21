//! Dictionaries for text analysis.
//!
//! Curated word sets used by sentence splitting, passive-voice detection and
//! list-item classification.

pub mod abbreviations;
pub mod irregular_verbs;
pub mod verbs;
