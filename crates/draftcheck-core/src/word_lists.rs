//! Curated word lists for writing analysis.
//!
//! Wordy phrases, spelling and terminology variants, hedge vocabulary,
//! acronym exemptions, list-item lexicons and technical jargon. All matching
//! against these lists is whole-word and case-insensitive unless noted.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Wordy phrases `(phrase, suggestion)` in reporting order.
pub const WORDY_PHRASES: &[(&str, &str)] = &[
    ("in order to", "to"),
    ("at this point in time", "now"),
    ("due to the fact that", "because"),
    ("in the event that", "if"),
    ("for the purpose of", "to"),
    ("in the process of", "(omit)"),
    ("it is important to note that", "(omit)"),
    ("as a matter of fact", "in fact"),
    ("a large number of", "many"),
    ("utilize", "use"),
    ("leverage", "use"),
    ("facilitate", "help / enable"),
];

/// US/UK spelling pairs `[us, uk]`. On a tie the US form is treated as dominant.
pub const US_UK_PAIRS: &[[&str; 2]] = &[
    ["color", "colour"],
    ["organize", "organise"],
    ["center", "centre"],
    ["behavior", "behaviour"],
    ["favor", "favour"],
    ["honor", "honour"],
    ["labor", "labour"],
    ["neighbor", "neighbour"],
    ["humor", "humour"],
    ["flavor", "flavour"],
    ["analyze", "analyse"],
    ["realize", "realise"],
    ["recognize", "recognise"],
    ["apologize", "apologise"],
    ["customize", "customise"],
    ["optimize", "optimise"],
    ["prioritize", "prioritise"],
    ["summarize", "summarise"],
    ["license", "licence"],
    ["defense", "defence"],
    ["offense", "offence"],
    ["catalog", "catalogue"],
    ["dialog", "dialogue"],
    ["program", "programme"],
    ["gray", "grey"],
    ["traveling", "travelling"],
    ["canceled", "cancelled"],
    ["modeling", "modelling"],
    ["fulfill", "fulfil"],
];

/// Groups of interchangeable terms. The first entry wins ties.
pub const TERM_GROUPS: &[&[&str]] = &[
    &["user", "customer", "client"],
    &["app", "application"],
    &["login", "log in", "log-in"],
    &["email", "e-mail"],
    &["website", "web site"],
    &["setup", "set-up"],
    &["sign in", "sign-in", "signin"],
    &["backend", "back end", "back-end"],
    &["frontend", "front end", "front-end"],
    &["database", "data base"],
    &["online", "on-line"],
    &["dropdown", "drop-down"],
    &["checkbox", "check box"],
];

/// Hedges expressing uncertainty.
pub const HEDGE_UNCERTAINTY: &[&str] = &[
    "might",
    "could",
    "may",
    "perhaps",
    "possibly",
    "conceivably",
    "presumably",
];

/// Hedges expressing frequency.
pub const HEDGE_FREQUENCY: &[&str] = &[
    "generally",
    "usually",
    "often",
    "sometimes",
    "occasionally",
    "typically",
    "normally",
    "frequently",
    "rarely",
    "seldom",
];

/// Hedges that soften a claim.
pub const HEDGE_SOFTENER: &[&str] = &[
    "somewhat",
    "fairly",
    "rather",
    "quite",
    "slightly",
    "relatively",
    "arguably",
    "practically",
    "essentially",
    "basically",
    "virtually",
];

/// Uppercase forms that never need expansion: universal abbreviations and
/// two-letter function words written in capitals.
pub static ACRONYM_SKIP_LIST: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "OK", "US", "AM", "PM", "ID", "TV", "UK", "EU", "UN", "DC", "AD", "BC", "CE", "IT", "OR",
        "AN", "AT", "IF", "IN", "IS", "NO", "OF", "ON", "SO", "TO", "UP", "VS",
    ]
    .into_iter()
    .collect()
});

/// Articles, demonstratives, quantifiers and possessives that open a noun phrase.
pub static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any",
        "all", "no", "your", "our", "their", "its", "my", "his", "her",
    ]
    .into_iter()
    .collect()
});

/// Subject pronouns and plural nouns that open a full sentence.
pub static SUBJECT_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "you", "we", "they", "it", "he", "she", "users", "developers", "administrators",
        "clients", "servers", "applications", "systems", "services", "components", "modules",
        "functions", "methods", "classes", "objects", "files", "directories", "endpoints",
        "requests", "responses",
    ]
    .into_iter()
    .collect()
});

/// Technical vocabulary that may need explaining to a non-technical reader.
pub const TECHNICAL_JARGON: &[&str] = &[
    "api",
    "endpoint",
    "middleware",
    "refactor",
    "deploy",
    "repository",
    "merge",
    "commit",
    "pipeline",
    "microservice",
    "containerize",
    "kubernetes",
    "docker",
    "webhook",
    "sdk",
    "cli",
    "dns",
    "tcp",
    "http",
    "ssl",
    "ssh",
    "cdn",
    "cron",
    "daemon",
    "regex",
    "mutex",
    "semaphore",
    "polymorphism",
    "abstraction",
    "encapsulation",
    "serialization",
    "deserialization",
];

/// Substrings of a reader context that mark the audience as technical.
pub const TECHNICAL_AUDIENCE_MARKERS: &[&str] = &[
    "developer",
    "engineer",
    "technical",
    "programmer",
    "devops",
    "architect",
];
