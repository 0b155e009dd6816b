//! Conversion of inline color tags into ratatui text.
//!
//! The renderers emit styling as inline tags, e.g.
//! `{gray-fg}`src/main.rs`{/gray-fg}`. This module turns such lines into
//! styled [`Line`]s for ratatui, or strips the tags for plain output.
//!
//! Only foreground color tags with a known color name are interpreted.
//! Anything else that looks like a tag is kept as literal text.
//!
//! | Tag name | Color |
//! |----------|-------|
//! | `black` | `Color::Black` |
//! | `red` | `Color::Red` |
//! | `green` | `Color::Green` |
//! | `yellow` | `Color::Yellow` |
//! | `blue` | `Color::Blue` |
//! | `magenta` | `Color::Magenta` |
//! | `cyan` | `Color::Cyan` |
//! | `white` | `Color::White` |
//! | `gray` / `grey` | `Color::DarkGray` |

use std::sync::LazyLock;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use regex::Regex;

/// An opening or closing foreground tag: `{name-fg}` or `{/name-fg}`.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(/?)([a-z]+)-fg\}").expect("tag pattern is valid"));

/// Maps a color name to a ratatui color.
///
/// Returns `None` for names the renderer does not know.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use mdtask_tui::markup::color_from_name;
///
/// assert_eq!(color_from_name("gray"), Some(Color::DarkGray));
/// assert_eq!(color_from_name("chartreuse"), None);
/// ```
#[must_use]
pub fn color_from_name(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::DarkGray,
        _ => return None,
    };
    Some(color)
}

/// Maps a status color name to a ratatui color, defaulting to white.
#[must_use]
pub fn status_color_to_color(name: &str) -> Color {
    color_from_name(name).unwrap_or(Color::White)
}

/// A piece of a tagged line.
enum Segment<'a> {
    Text(&'a str),
    Open(Color),
    Close(Color),
}

/// Splits a line into text and recognized tags.
fn segments(line: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0;

    for caps in TAG_RE.captures_iter(line) {
        let (Some(whole), Some(slash), Some(name)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        // Unknown colors stay in the surrounding text.
        let Some(color) = color_from_name(name.as_str()) else {
            continue;
        };

        if whole.start() > cursor {
            out.push(Segment::Text(&line[cursor..whole.start()]));
        }
        out.push(if slash.as_str().is_empty() {
            Segment::Open(color)
        } else {
            Segment::Close(color)
        });
        cursor = whole.end();
    }

    if cursor < line.len() {
        out.push(Segment::Text(&line[cursor..]));
    }
    out
}

/// Converts a tagged line into a styled ratatui [`Line`].
///
/// Tags nest; a closing tag ends the innermost open tag of the same color.
/// A closing tag with no matching opener is ignored.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use mdtask_tui::markup::parse_markup;
///
/// let line = parse_markup("see {gray-fg}`src/lib.rs`{/gray-fg}");
/// assert_eq!(line.spans.len(), 2);
/// assert_eq!(line.spans[0].content, "see ");
/// assert_eq!(line.spans[1].content, "`src/lib.rs`");
/// assert_eq!(line.spans[1].style.fg, Some(Color::DarkGray));
/// ```
#[must_use]
pub fn parse_markup(line: &str) -> Line<'static> {
    let mut stack: Vec<Color> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();

    for segment in segments(line) {
        match segment {
            Segment::Text(text) => {
                let style = stack
                    .last()
                    .map_or_else(Style::default, |&color| Style::default().fg(color));
                spans.push(Span::styled(text.to_string(), style));
            }
            Segment::Open(color) => stack.push(color),
            Segment::Close(color) => {
                if let Some(pos) = stack.iter().rposition(|&c| c == color) {
                    stack.remove(pos);
                }
            }
        }
    }

    Line::from(spans)
}

/// Removes recognized color tags, leaving the text between them.
///
/// # Examples
///
/// ```
/// use mdtask_tui::markup::strip_markup;
///
/// assert_eq!(strip_markup("{gray-fg}`a.rs`{/gray-fg}"), "`a.rs`");
/// assert_eq!(strip_markup("{bold}kept{/bold}"), "{bold}kept{/bold}");
/// ```
#[must_use]
pub fn strip_markup(line: &str) -> String {
    segments(line)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Text(text) => Some(text),
            Segment::Open(_) | Segment::Close(_) => None,
        })
        .collect()
}
