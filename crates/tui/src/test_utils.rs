//! Test utilities for the TUI crate.
//!
//! This module provides common helper functions used across test modules
//! for rendering verification and snapshot testing.

use ratatui::text::Line;

/// Converts rendered [`Line`]s to a string representation.
///
/// Each line becomes the concatenation of its span contents followed by a
/// newline. Styling is dropped, so the output matches what a terminal
/// without colors would show.
///
/// # Example
///
/// ```ignore
/// use ratatui::text::Line;
///
/// let lines = vec![Line::from("Hello"), Line::from("")];
/// assert_eq!(lines_to_string(&lines), "Hello\n\n");
/// ```
#[must_use]
pub(crate) fn lines_to_string(lines: &[Line<'_>]) -> String {
    let mut result = String::new();
    for line in lines {
        for span in &line.spans {
            result.push_str(&span.content);
        }
        result.push('\n');
    }
    result
}
