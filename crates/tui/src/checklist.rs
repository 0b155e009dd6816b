//! Checkbox parsing and checklist formatting.
//!
//! Parsing is forgiving: any line that is not a checkbox line is skipped.
//! Formatting is strict: every row produced with the same
//! [`FormatOptions`] puts its opening bracket at the same column.
//!
//! # Example
//!
//! ```
//! use mdtask_protocol::FormatOptions;
//! use mdtask_tui::checklist::{format_checklist, parse_checkbox_lines};
//!
//! let items = parse_checkbox_lines("## Todo\n- [x] Parse input\n-[ ]   Render output\n");
//! let lines = format_checklist(&items, &FormatOptions::default());
//! assert_eq!(lines, vec![" [x] Parse input", " [ ] Render output"]);
//! ```

use mdtask_protocol::{ChecklistItem, FormatOptions};

use crate::patterns::{match_checkbox_line, split_lines};

/// Parses a single markdown checkbox line.
///
/// Returns `None` if the line has no checkbox marker, malformed brackets,
/// or a state character other than `x`, `X` or a space. The item text is
/// trimmed on both sides.
///
/// # Examples
///
/// ```
/// use mdtask_tui::checklist::parse_checkbox_line;
///
/// let item = parse_checkbox_line("- [x]    Extra spaces").unwrap();
/// assert!(item.checked);
/// assert_eq!(item.text, "Extra spaces");
///
/// assert!(parse_checkbox_line("- [y] Not a checkbox").is_none());
/// assert!(parse_checkbox_line("Just prose").is_none());
/// ```
#[must_use]
pub fn parse_checkbox_line(line: &str) -> Option<ChecklistItem> {
    let m = match_checkbox_line(line)?;
    Some(ChecklistItem::new(m.rest.trim(), m.is_checked()))
}

/// Parses every checkbox line in `text`, skipping everything else.
///
/// Headers, prose, and blank lines are dropped silently. The surviving
/// items keep their document order. Empty input yields an empty vector.
#[must_use]
pub fn parse_checkbox_lines(text: &str) -> Vec<ChecklistItem> {
    split_lines(text).filter_map(parse_checkbox_line).collect()
}

/// Formats one item as `padding + "[" + symbol + "] " + text`.
///
/// # Examples
///
/// ```
/// use mdtask_protocol::{ChecklistItem, FormatOptions};
/// use mdtask_tui::checklist::format_checklist_item;
///
/// let item = ChecklistItem::new("Deploy", true);
/// assert_eq!(format_checklist_item(&item, &FormatOptions::default()), " [x] Deploy");
///
/// let options = FormatOptions::default().with_checked_symbol("✓").with_padding("  ");
/// assert_eq!(format_checklist_item(&item, &options), "  [✓] Deploy");
/// ```
#[must_use]
pub fn format_checklist_item(item: &ChecklistItem, options: &FormatOptions) -> String {
    format!(
        "{}[{}] {}",
        options.padding,
        options.symbol_for(item),
        item.text
    )
}

/// Formats each item, one output line per item, in order.
#[must_use]
pub fn format_checklist(items: &[ChecklistItem], options: &FormatOptions) -> Vec<String> {
    items
        .iter()
        .map(|item| format_checklist_item(item, options))
        .collect()
}
