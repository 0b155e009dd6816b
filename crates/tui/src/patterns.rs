//! Textual patterns shared by the markdown renderers.
//!
//! Three shapes are recognized:
//!
//! | Pattern | Example | Used by |
//! |---------|---------|---------|
//! | Checkbox line | `  - [x] Write tests` | checklist parser |
//! | Checkbox prefix | `- [ ] ` | marker detection and stripping |
//! | Backticked span | `` `src/main.rs` `` | code path detection |
//!
//! The compiled regexes are shared statics. A `Regex` holds no scan
//! position; every scan below creates its own iterator, so repeated and
//! concurrent calls never observe each other.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// A full checkbox line: marker state in group 1, remaining text in group 2.
static CHECKBOX_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*- ?\[([ xX])\](.*)$").expect("checkbox line pattern is valid")
});

/// Just the leading checkbox marker, with at most one trailing space.
static CHECKBOX_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*- ?\[[ xX]\] ?").expect("checkbox prefix pattern is valid")
});

/// A backtick-delimited span on a single line.
static BACKTICKED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\r\n]+)`").expect("backtick pattern is valid"));

/// The pieces of a matched checkbox line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxMatch<'a> {
    /// The character between the brackets: `' '`, `'x'` or `'X'`.
    pub marker: char,
    /// Everything after the closing bracket, untrimmed.
    pub rest: &'a str,
}

impl CheckboxMatch<'_> {
    /// Returns `true` when the marker denotes a completed item.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        matches!(self.marker, 'x' | 'X')
    }
}

/// Matches a checkbox line such as `- [x] done` or `-[ ]todo`.
///
/// # Examples
///
/// ```
/// use mdtask_tui::patterns::match_checkbox_line;
///
/// let m = match_checkbox_line("  - [X]   Review docs").unwrap();
/// assert!(m.is_checked());
/// assert_eq!(m.rest, "   Review docs");
///
/// assert!(match_checkbox_line("- [y] nope").is_none());
/// assert!(match_checkbox_line("* [x] wrong bullet").is_none());
/// ```
#[must_use]
pub fn match_checkbox_line(line: &str) -> Option<CheckboxMatch<'_>> {
    let caps = CHECKBOX_LINE_RE.captures(line)?;
    let marker = caps.get(1)?.as_str().chars().next()?;
    let rest = caps.get(2).map_or("", |m| m.as_str());
    Some(CheckboxMatch { marker, rest })
}

/// Returns `true` if `line` starts with a checkbox marker.
#[must_use]
pub fn has_checkbox_prefix(line: &str) -> bool {
    CHECKBOX_PREFIX_RE.is_match(line)
}

/// Removes a leading checkbox marker, returning the line unchanged if none.
///
/// # Examples
///
/// ```
/// use mdtask_tui::patterns::strip_checkbox_prefix;
///
/// assert_eq!(strip_checkbox_prefix("- [x] Done item"), "Done item");
/// assert_eq!(strip_checkbox_prefix("plain prose"), "plain prose");
/// ```
#[must_use]
pub fn strip_checkbox_prefix(line: &str) -> &str {
    CHECKBOX_PREFIX_RE
        .find(line)
        .map_or(line, |m| &line[m.end()..])
}

/// A backticked span located in a line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacktickSpan<'a> {
    /// Byte range of the span in the scanned text, backticks included.
    pub range: Range<usize>,
    /// The text between the backticks.
    pub content: &'a str,
}

/// Scans `text` for backticked spans, left to right.
///
/// Spans never cross a line break.
///
/// # Examples
///
/// ```
/// use mdtask_tui::patterns::backticked_spans;
///
/// let spans: Vec<_> = backticked_spans("Use `foo` and `bar/baz`").collect();
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[1].content, "bar/baz");
/// ```
pub fn backticked_spans(text: &str) -> impl Iterator<Item = BacktickSpan<'_>> {
    BACKTICKED_RE.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let inner = caps.get(1)?;
        Some(BacktickSpan {
            range: whole.range(),
            content: inner.as_str(),
        })
    })
}

/// Splits text on `\n`, `\r\n` or a lone `\r`.
///
/// Unlike [`str::lines`], a trailing terminator yields a final empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}
