//! Locating named sections in a task document.
//!
//! A task file is a markdown document whose headings split it into
//! sections (`## Description`, `## Acceptance Criteria`, ...). Headings are
//! found with `pulldown-cmark`, so a `#` line inside a fenced code block
//! never starts a section, and both ATX (`## Title`) and setext
//! (`Title` / `---`) headings are understood. Headings nested in a list
//! item or a block quote belong to the surrounding section and never split
//! it.

use std::ops::Range;

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use tracing::trace;

/// A heading found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Heading {
    level: HeadingLevel,
    /// Byte range of the whole heading construct.
    range: Range<usize>,
    /// Plain text of the heading, inline markup removed.
    text: String,
}

/// Collects every top-level heading in document order.
fn headings(document: &str) -> Vec<Heading> {
    let mut found = Vec::new();
    let mut current: Option<Heading> = None;
    // Open list, item and block quote containers.
    let mut depth = 0usize;

    for (event, range) in Parser::new(document).into_offset_iter() {
        match event {
            Event::Start(Tag::List(_) | Tag::Item | Tag::BlockQuote(_)) => depth += 1,
            Event::End(TagEnd::List(_) | TagEnd::Item | TagEnd::BlockQuote(_)) => {
                depth = depth.saturating_sub(1);
            }
            Event::Start(Tag::Heading { level, .. }) if depth == 0 => {
                current = Some(Heading {
                    level,
                    range,
                    text: String::new(),
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = current.take() {
                    found.push(heading);
                }
            }
            _ => {}
        }
    }

    found
}

/// Converts a heading level to its numeric value.
fn heading_level_to_num(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Strips surrounding whitespace and a trailing colon from heading text.
fn normalize_heading(text: &str) -> &str {
    let text = text.trim();
    text.strip_suffix(':').map_or(text, str::trim_end)
}

/// Returns the body of the first section whose heading matches `name`.
///
/// The heading may be at any level and is compared case-insensitively
/// after trimming, ignoring a trailing colon (`## Acceptance Criteria:`). The body runs from the end of the heading to the next
/// heading of the same or a higher level (a smaller `#` count), or to the
/// end of the document. Deeper sub-headings stay inside the body.
///
/// Returns `None` when no heading matches.
///
/// # Examples
///
/// ```
/// use mdtask_tui::section::extract_section;
///
/// let doc = "# Task\n\n## Description\nDo the thing.\n\n### Notes\nCarefully.\n\n## Plan\nLater.\n";
/// let body = extract_section(doc, "description").unwrap();
/// assert!(body.contains("Do the thing."));
/// assert!(body.contains("### Notes"));
/// assert!(!body.contains("Later."));
///
/// assert!(extract_section(doc, "Acceptance Criteria").is_none());
/// ```
#[must_use]
pub fn extract_section<'a>(document: &'a str, name: &str) -> Option<&'a str> {
    let name = normalize_heading(name);
    let headings = headings(document);

    let Some(index) = headings
        .iter()
        .position(|h| normalize_heading(&h.text).eq_ignore_ascii_case(name))
    else {
        trace!(section = name, "section not found");
        return None;
    };

    let heading = &headings[index];
    let level = heading_level_to_num(heading.level);
    let start = heading.range.end;
    let end = headings[index + 1..]
        .iter()
        .find(|next| heading_level_to_num(next.level) <= level)
        .map_or(document.len(), |next| next.range.start);

    trace!(section = name, start, end, "section found");
    Some(document.get(start..end.max(start)).unwrap_or_default())
}

/// Returns the text of the first level-1 heading, if any.
///
/// # Examples
///
/// ```
/// use mdtask_tui::section::document_title;
///
/// assert_eq!(document_title("intro\n\n# My Task\n\n## Details\n"), Some("My Task".to_string()));
/// assert_eq!(document_title("## Only a subsection\n"), None);
/// ```
#[must_use]
pub fn document_title(document: &str) -> Option<String> {
    headings(document)
        .into_iter()
        .find(|h| h.level == HeadingLevel::H1)
        .map(|h| h.text.trim().to_string())
}
