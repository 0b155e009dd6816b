//! Acceptance criteria alignment.
//!
//! An acceptance criteria section usually holds a checklist, but authors
//! mix in notes and blank lines. Checkbox rows are reformatted through the
//! checklist formatter; other non-blank lines get the same leading padding
//! so that prose starts at the column of the checklist's opening bracket.
//!
//! ```text
//! - [x] Parser handles CRLF            [x] Parser handles CRLF
//! Notes from review:            ->     Notes from review:
//! -[ ]  Formatter aligns brackets      [ ] Formatter aligns brackets
//! ```

use mdtask_protocol::FormatOptions;

use crate::checklist::{format_checklist_item, parse_checkbox_line};
use crate::patterns::split_lines;
use crate::section::extract_section;

/// Heading text of the acceptance criteria section.
pub const ACCEPTANCE_CRITERIA_HEADING: &str = "Acceptance Criteria";

/// Aligns a criteria section body using the default format options.
///
/// Produces one line per non-blank input line; blank lines are dropped.
///
/// # Examples
///
/// ```
/// use mdtask_tui::acceptance::align_acceptance_criteria;
///
/// let lines = align_acceptance_criteria("- [x] First\n\nA note\n-[ ]   Second\n");
/// assert_eq!(lines, vec![" [x] First", " A note", " [ ] Second"]);
/// ```
#[must_use]
pub fn align_acceptance_criteria(section_text: &str) -> Vec<String> {
    align_acceptance_criteria_with(section_text, &FormatOptions::default())
}

/// Aligns a criteria section body using `options`.
///
/// Prose lines are trimmed and prefixed with `options.padding`, matching
/// the padding of the checklist rows.
#[must_use]
pub fn align_acceptance_criteria_with(section_text: &str, options: &FormatOptions) -> Vec<String> {
    split_lines(section_text)
        .filter(|line| !line.trim().is_empty())
        .map(|line| match parse_checkbox_line(line) {
            Some(item) => format_checklist_item(&item, options),
            None => format!("{}{}", options.padding, line.trim()),
        })
        .collect()
}

/// Finds the acceptance criteria section of `document` and aligns it.
///
/// Returns an empty vector when the document has no such section.
///
/// # Examples
///
/// ```
/// use mdtask_tui::acceptance::extract_and_format_acceptance_criteria;
///
/// let doc = "# Task\n\n## Acceptance Criteria\n- [ ] Works\n\n## Notes\n- [x] unrelated\n";
/// assert_eq!(extract_and_format_acceptance_criteria(doc), vec![" [ ] Works"]);
///
/// assert!(extract_and_format_acceptance_criteria("# Task\n\nNo criteria.").is_empty());
/// ```
#[must_use]
pub fn extract_and_format_acceptance_criteria(document: &str) -> Vec<String> {
    extract_and_format_acceptance_criteria_with(document, &FormatOptions::default())
}

/// Finds the acceptance criteria section of `document` and aligns it with `options`.
#[must_use]
pub fn extract_and_format_acceptance_criteria_with(
    document: &str,
    options: &FormatOptions,
) -> Vec<String> {
    extract_section(document, ACCEPTANCE_CRITERIA_HEADING)
        .map(|body| align_acceptance_criteria_with(body, options))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_checkboxes_and_prose() {
        let section = "\
- [x] Parser handles CRLF
Notes from review:
-[ ]  Formatter aligns brackets
";
        assert_eq!(
            align_acceptance_criteria(section),
            vec![
                " [x] Parser handles CRLF",
                " Notes from review:",
                " [ ] Formatter aligns brackets",
            ]
        );
    }

    #[test]
    fn blank_and_whitespace_lines_are_dropped() {
        let lines = align_acceptance_criteria("\n   \n- [ ] a\n\t\n\n- [x] b\n\n");
        assert_eq!(lines, vec![" [ ] a", " [x] b"]);
    }

    #[test]
    fn prose_is_trimmed_before_padding() {
        let lines = align_acceptance_criteria("    indented note   ");
        assert_eq!(lines, vec![" indented note"]);
    }

    #[test]
    fn malformed_checkbox_is_passed_through_as_prose() {
        let lines = align_acceptance_criteria("- [y] not a box\n- plain bullet");
        assert_eq!(lines, vec![" - [y] not a box", " - plain bullet"]);
    }

    #[test]
    fn prose_and_brackets_share_left_edge() {
        let options = FormatOptions::default().with_padding("   ");
        let lines = align_acceptance_criteria_with("- [ ] box\nprose", &options);
        assert_eq!(lines, vec!["   [ ] box", "   prose"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(align_acceptance_criteria("").is_empty());
    }

    #[test]
    fn extract_from_document() {
        let doc = "\
# task-7 - Example

## Description
Some text with - [x] inline noise.

## acceptance criteria
- [x] One
- [ ] Two
Remember the edge cases.

## Implementation Plan
1. Do it
";
        assert_eq!(
            extract_and_format_acceptance_criteria(doc),
            vec![" [x] One", " [ ] Two", " Remember the edge cases."]
        );
    }

    #[test]
    fn nested_headings_do_not_cut_criteria() {
        let doc = "## Acceptance Criteria\n- [x] One\n- ## Sub-goal\n- [ ] Two\n";
        assert_eq!(
            extract_and_format_acceptance_criteria(doc),
            vec![" [x] One", " - ## Sub-goal", " [ ] Two"]
        );

        let quoted = "## Acceptance Criteria\n- [x] One\n\n> # quoted\n\n- [ ] Two\n";
        assert_eq!(
            extract_and_format_acceptance_criteria(quoted),
            vec![" [x] One", " > # quoted", " [ ] Two"]
        );
    }

    #[test]
    fn heading_with_trailing_colon_is_found() {
        let doc = "## Acceptance Criteria:\n- [ ] Works\n";
        assert_eq!(extract_and_format_acceptance_criteria(doc), vec![" [ ] Works"]);
    }

    #[test]
    fn extract_without_section_is_empty() {
        assert!(extract_and_format_acceptance_criteria("").is_empty());
        assert!(extract_and_format_acceptance_criteria("## Description\n- [x] a\n").is_empty());
    }

    #[test]
    fn extract_with_custom_symbols() {
        let doc = "## Acceptance Criteria\n- [x] Done\n- [ ] Open\n";
        let options = FormatOptions::default()
            .with_checked_symbol("✓")
            .with_unchecked_symbol("·");
        assert_eq!(
            extract_and_format_acceptance_criteria_with(doc, &options),
            vec![" [✓] Done", " [·] Open"]
        );
    }
}
