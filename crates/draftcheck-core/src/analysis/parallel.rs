//! Parallel structure in markdown lists.
//!
//! Consecutive list items form a list. Each item is classified by how it
//! opens (imperative, gerund, ...), whether it is capitalized and how it
//! ends, and items that differ from the list's majority are flagged.

use crate::dictionaries::verbs::{AUXILIARY_VERBS, IMPERATIVE_VERBS};
use crate::markdown::{mask_code_blocks, parse_list_line};
use crate::word_lists::{DETERMINERS, SUBJECT_WORDS};

use super::reports::{
    ListItemPattern, ParallelIssueKind, ParallelStructureIssue, ParallelStructureItem,
    ParallelStructureList, ParallelStructureReport,
};

/// Check every list in the document for parallel structure.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_parallel_structure(text: &str) -> ParallelStructureReport {
    let prose = mask_code_blocks(text);

    let mut lists = Vec::new();
    let mut issues = Vec::new();
    for (list_index, items) in extract_lists(&prose).into_iter().enumerate() {
        let list = summarize(items);
        if list.items.len() >= 2 {
            issues.extend(list_issues(list_index, &list));
        }
        let is_consistent = !issues.iter().any(|i| i.list_index == list_index);
        lists.push(ParallelStructureList {
            is_consistent,
            ..list
        });
    }

    tracing::debug!(
        lists = lists.len(),
        issues = issues.len(),
        "parallel structure check complete"
    );
    ParallelStructureReport { lists, issues }
}

/// Group consecutive list lines into classified items.
fn extract_lists(prose: &str) -> Vec<Vec<ParallelStructureItem>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();
    let mut line_start = 0;

    for (i, line) in prose.split('\n').enumerate() {
        let content = line.strip_suffix('\r').unwrap_or(line);
        match parse_list_line(content) {
            Some(item) => current.push(ParallelStructureItem {
                line: i + 1,
                text: item.text.to_string(),
                absolute_offset: line_start + item.text_start,
                pattern: classify(item.text),
                capitalized: item.text.starts_with(|c: char| c.is_ascii_uppercase()),
                trailing_punctuation: trailing_punctuation(item.text).to_string(),
            }),
            None if !current.is_empty() => groups.push(std::mem::take(&mut current)),
            None => {}
        }
        line_start += line.len() + 1;
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Classify an item by its opening words.
fn classify(text: &str) -> ListItemPattern {
    let words: Vec<&str> = text.split_whitespace().collect();
    let Some(first) = words.first() else {
        return ListItemPattern::Other;
    };
    let lower = first.to_lowercase();
    let second = words.get(1).map(|w| w.to_lowercase());

    if lower == "to"
        && let Some(verb) = &second
        && (IMPERATIVE_VERBS.contains(verb.as_str())
            || verb.ends_with("ate")
            || verb.ends_with("ize")
            || verb.ends_with("ify"))
    {
        return ListItemPattern::Infinitive;
    }
    if lower.ends_with("ing") && lower.len() > 4 {
        return ListItemPattern::Gerund;
    }
    if IMPERATIVE_VERBS.contains(lower.as_str()) {
        return ListItemPattern::Imperative;
    }
    if DETERMINERS.contains(lower.as_str()) {
        return ListItemPattern::NounPhrase;
    }
    if SUBJECT_WORDS.contains(lower.as_str()) {
        return ListItemPattern::Sentence;
    }
    if first.starts_with(|c: char| c.is_ascii_uppercase())
        && second.is_some_and(|w| AUXILIARY_VERBS.contains(w.as_str()))
    {
        return ListItemPattern::Sentence;
    }
    ListItemPattern::Other
}

fn trailing_punctuation(text: &str) -> &str {
    match text.chars().last() {
        Some('.') => ".",
        Some(';') => ";",
        Some(':') => ":",
        _ => "",
    }
}

/// Compute the majority values of a list.
fn summarize(items: Vec<ParallelStructureItem>) -> ParallelStructureList {
    let start_line = items.first().map_or(0, |item| item.line);
    let dominant_pattern = majority(items.iter().map(|item| item.pattern))
        .map_or(ListItemPattern::Other, |(value, _)| value);

    let capitalized = items.iter().filter(|item| item.capitalized).count();
    let dominant_capitalization = capitalized >= items.len() - capitalized;

    // An unpunctuated ending wins any tie it takes part in.
    let mut dominant_punctuation = "";
    let mut best = 0;
    for (punct, count) in tally(items.iter().map(|item| item.trailing_punctuation.as_str())) {
        if count > best || (count == best && punct.is_empty()) {
            best = count;
            dominant_punctuation = punct;
        }
    }
    let dominant_punctuation = dominant_punctuation.to_string();

    ParallelStructureList {
        start_line,
        items,
        dominant_pattern,
        dominant_capitalization,
        dominant_punctuation,
        is_consistent: true,
    }
}

/// Counts of distinct values in first-seen order.
fn tally<T: PartialEq>(values: impl Iterator<Item = T>) -> Vec<(T, usize)> {
    let mut counts: Vec<(T, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

/// The most frequent value; ties go to the first seen.
fn majority<T: PartialEq>(values: impl Iterator<Item = T>) -> Option<(T, usize)> {
    tally(values)
        .into_iter()
        .fold(None, |best, (value, count)| match best {
            Some((_, n)) if n >= count => best,
            _ => Some((value, count)),
        })
}

fn list_issues(list_index: usize, list: &ParallelStructureList) -> Vec<ParallelStructureIssue> {
    let mut issues = Vec::new();
    for (item_index, item) in list.items.iter().enumerate() {
        let issue = |kind, message| ParallelStructureIssue {
            list_index,
            item_index,
            item_line: item.line,
            item_absolute_offset: item.absolute_offset,
            item_length: item.text.len(),
            kind,
            message,
        };

        if item.pattern != list.dominant_pattern {
            issues.push(issue(
                ParallelIssueKind::Pattern,
                format!(
                    "Expected {} pattern but found {}: \"{}\"",
                    list.dominant_pattern, item.pattern, item.text
                ),
            ));
        }
        if item.capitalized != list.dominant_capitalization {
            issues.push(issue(
                ParallelIssueKind::Capitalization,
                format!(
                    "Inconsistent capitalization: this item {} capitalized while most items {}",
                    if item.capitalized { "is" } else { "is not" },
                    if list.dominant_capitalization { "are" } else { "are not" },
                ),
            ));
        }
        if item.trailing_punctuation != list.dominant_punctuation {
            issues.push(issue(
                ParallelIssueKind::Punctuation,
                format!(
                    "Inconsistent ending punctuation: this item ends with \"{}\" while most items end with \"{}\"",
                    describe_punctuation(&item.trailing_punctuation),
                    describe_punctuation(&list.dominant_punctuation),
                ),
            ));
        }
    }
    issues
}

fn describe_punctuation(punct: &str) -> &str {
    if punct.is_empty() { "no punctuation" } else { punct }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(text: &str) -> Vec<ListItemPattern> {
        check_parallel_structure(text).lists[0]
            .items
            .iter()
            .map(|item| item.pattern)
            .collect()
    }

    fn of_kind(report: &ParallelStructureReport, kind: ParallelIssueKind) -> Vec<&ParallelStructureIssue> {
        report.issues.iter().filter(|i| i.kind == kind).collect()
    }

    #[test]
    fn no_lists() {
        let report = check_parallel_structure("Just a paragraph with no lists at all.");
        assert!(report.lists.is_empty());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn extracts_markers() {
        for text in [
            "- Install the package\n- Run the tests\n- Deploy the app",
            "* Install the package\n* Run the tests\n* Deploy the app",
            "1. Install the package\n2. Run the tests\n3. Deploy the app",
        ] {
            let report = check_parallel_structure(text);
            assert_eq!(report.lists.len(), 1);
            assert_eq!(report.lists[0].items.len(), 3);
            assert_eq!(report.lists[0].items[0].text, "Install the package");
        }
    }

    #[test]
    fn lists_split_on_other_lines() {
        let text = "- First item 1\n- First item 2\n\n- Second item 1\n- Second item 2";
        let report = check_parallel_structure(text);
        assert_eq!(report.lists.len(), 2);
        assert_eq!(report.lists[1].start_line, 4);

        let text = "- One\n- Two\nSome paragraph text\n- Three\n- Four";
        assert_eq!(check_parallel_structure(text).lists.len(), 2);
    }

    #[test]
    fn lists_in_code_are_ignored() {
        let text = "Some text.\n```\n- This is code\n- Not a list\n```\nMore text.";
        assert!(check_parallel_structure(text).lists.is_empty());
    }

    #[test]
    fn item_offsets_point_at_text() {
        let text = "- Install the package\n- Run the tests";
        let items = &check_parallel_structure(text).lists[0].items;
        assert_eq!(items[0].absolute_offset, 2);
        assert_eq!(items[1].absolute_offset, 24);
        assert_eq!(items[1].line, 2);

        let text = "Intro\n  10.   Wide marker";
        let item = &check_parallel_structure(text).lists[0].items[0];
        assert_eq!(&text[item.absolute_offset..], "Wide marker");
    }

    #[test]
    fn classifies_patterns() {
        use ListItemPattern::*;
        assert_eq!(
            patterns("- Install the package\n- Run the tests"),
            vec![Imperative, Imperative]
        );
        assert_eq!(
            patterns("- Installing the package\n- Running the tests"),
            vec![Gerund, Gerund]
        );
        assert_eq!(
            patterns("- To install the package\n- To validate input\n- To the moon"),
            vec![Infinitive, Infinitive, Other]
        );
        assert_eq!(
            patterns("- The package manager\n- An application server"),
            vec![NounPhrase, NounPhrase]
        );
        assert_eq!(
            patterns("- You should install it\n- Developers run tests\n- Docker can deploy it"),
            vec![Sentence, Sentence, Sentence]
        );
        assert_eq!(patterns("- Red\n- Blue\n- King"), vec![Other, Other, Other]);
    }

    #[test]
    fn consistent_list_has_no_issues() {
        let report = check_parallel_structure("- Install the package.\n- Run the tests.\n- Deploy the app.");
        assert!(report.issues.is_empty());
        assert!(report.lists[0].is_consistent);
        assert_eq!(report.lists[0].dominant_punctuation, ".");
    }

    #[test]
    fn flags_mixed_patterns() {
        let text = "- Install the package\n- Running the tests\n- Deploy the app\n- Build the project";
        let report = check_parallel_structure(text);
        assert_eq!(report.lists[0].dominant_pattern, ListItemPattern::Imperative);
        assert!(!report.lists[0].is_consistent);
        let issues = of_kind(&report, ParallelIssueKind::Pattern);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].item_index, 1);
        assert_eq!(
            issues[0].message,
            "Expected imperative pattern but found gerund: \"Running the tests\""
        );
        assert_eq!(issues[0].item_length, "Running the tests".len());
        assert_eq!(
            &text[issues[0].item_absolute_offset..][..issues[0].item_length],
            "Running the tests"
        );
    }

    #[test]
    fn pattern_tie_goes_to_first_seen() {
        let report = check_parallel_structure("- Running fast\n- Install it");
        assert_eq!(report.lists[0].dominant_pattern, ListItemPattern::Gerund);
    }

    #[test]
    fn flags_capitalization() {
        let report = check_parallel_structure("- Install the package\n- run the tests\n- Deploy the app");
        let issues = of_kind(&report, ParallelIssueKind::Capitalization);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].item_index, 1);
        assert_eq!(
            issues[0].message,
            "Inconsistent capitalization: this item is not capitalized while most items are"
        );
    }

    #[test]
    fn capitalization_tie_goes_to_capitalized() {
        let report = check_parallel_structure("- Install it\n- run it");
        assert!(report.lists[0].dominant_capitalization);
    }

    #[test]
    fn flags_punctuation() {
        let report = check_parallel_structure("- Install the package.\n- Run the tests\n- Deploy the app.");
        let issues = of_kind(&report, ParallelIssueKind::Punctuation);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].item_index, 1);
        assert_eq!(
            issues[0].message,
            "Inconsistent ending punctuation: this item ends with \"no punctuation\" while most items end with \".\""
        );
    }

    #[test]
    fn punctuation_tie_goes_to_none() {
        let report = check_parallel_structure("- Install it.\n- Run it");
        assert_eq!(report.lists[0].dominant_punctuation, "");
        let report = check_parallel_structure("- Install it;\n- Run it:");
        assert_eq!(report.lists[0].dominant_punctuation, ";");
    }

    #[test]
    fn crlf_line_endings() {
        let report = check_parallel_structure("- Install it.\r\n- Run it.\r\n- Deploy it.\r\n");
        let list = &report.lists[0];
        assert_eq!(list.items[0].text, "Install it.");
        assert_eq!(list.items[0].trailing_punctuation, ".");
        assert_eq!(list.dominant_punctuation, ".");
        assert!(report.issues.is_empty());

        let text = "- Install it.\r\n- Run it\r\n- Deploy it.\r\n";
        let report = check_parallel_structure(text);
        let issues = of_kind(&report, ParallelIssueKind::Punctuation);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].item_index, 1);
        assert_eq!(issues[0].item_length, "Run it".len());
        assert_eq!(
            &text[issues[0].item_absolute_offset..][..issues[0].item_length],
            "Run it"
        );
    }

    #[test]
    fn single_item_list_never_flagged() {
        let report = check_parallel_structure("- Just one item");
        assert_eq!(report.lists.len(), 1);
        assert!(report.issues.is_empty());
        assert!(report.lists[0].is_consistent);
    }

    #[test]
    fn issues_carry_list_index() {
        let text = "- Install it\n- Running it\n\nText.\n\n- Red\n- blue";
        let report = check_parallel_structure(text);
        assert!(report.issues.iter().any(|i| i.list_index == 0));
        assert!(report.issues.iter().any(|i| i.list_index == 1));
        assert!(!report.lists[0].is_consistent);
        assert!(!report.lists[1].is_consistent);
    }
}
