//! Task status vocabulary and its display styles.
//!
//! Task files carry a free-text `status` label. The renderer recognizes a
//! fixed set of canonical labels and gives each an icon glyph and a color
//! name. Anything else (including casing variants such as `"done"`) falls
//! back to [`StatusStyle::DEFAULT`] rather than failing.
//!
//! | Label | Icon | Color |
//! |-------|------|-------|
//! | `Done` | `✔` | green |
//! | `In Progress` | `◒` | yellow |
//! | `Blocked` | `●` | red |
//! | `To Do` | `○` | white |
//! | `Review` | `◆` | blue |
//! | `Testing` | `▣` | cyan |
//! | *other* | `○` | white |
//!
//! # Example
//!
//! ```
//! use mdtask_protocol::{StatusStyle, status_style};
//!
//! assert_eq!(status_style("Blocked").color, "red");
//! assert_eq!(status_style("Unknown Status"), StatusStyle::DEFAULT);
//! ```

use serde::{Deserialize, Serialize};

/// The icon and color used to display a task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StatusStyle {
    /// A single glyph shown before the label.
    pub icon: &'static str,
    /// A color name understood by the terminal renderer (e.g. `"green"`).
    pub color: &'static str,
}

impl StatusStyle {
    /// The style used for any label outside the fixed vocabulary.
    pub const DEFAULT: Self = Self {
        icon: "○",
        color: "white",
    };
}

impl Default for StatusStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The canonical task statuses.
///
/// Labels are matched case-sensitively against their canonical spelling.
///
/// # Examples
///
/// ```
/// use mdtask_protocol::TaskStatus;
///
/// assert_eq!(TaskStatus::from_label("In Progress"), Some(TaskStatus::InProgress));
/// assert_eq!(TaskStatus::from_label("in progress"), None);
/// assert_eq!(TaskStatus::InProgress.label(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not started yet.
    #[serde(rename = "To Do")]
    ToDo,
    /// Work is underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Waiting on something external.
    Blocked,
    /// Awaiting review.
    Review,
    /// Being tested.
    Testing,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// All statuses, in workflow order.
    pub const ALL: [Self; 6] = [
        Self::ToDo,
        Self::InProgress,
        Self::Blocked,
        Self::Review,
        Self::Testing,
        Self::Done,
    ];

    /// Returns the canonical label for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Blocked => "Blocked",
            Self::Review => "Review",
            Self::Testing => "Testing",
            Self::Done => "Done",
        }
    }

    /// Parses a canonical label. Returns `None` for anything else.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }

    /// Returns the display style for this status.
    #[must_use]
    pub const fn style(self) -> StatusStyle {
        match self {
            Self::Done => StatusStyle {
                icon: "✔",
                color: "green",
            },
            Self::InProgress => StatusStyle {
                icon: "◒",
                color: "yellow",
            },
            Self::Blocked => StatusStyle {
                icon: "●",
                color: "red",
            },
            Self::ToDo => StatusStyle {
                icon: "○",
                color: "white",
            },
            Self::Review => StatusStyle {
                icon: "◆",
                color: "blue",
            },
            Self::Testing => StatusStyle {
                icon: "▣",
                color: "cyan",
            },
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the display style for a status label.
///
/// Unrecognized labels resolve to [`StatusStyle::DEFAULT`].
#[must_use]
pub fn status_style(label: &str) -> StatusStyle {
    TaskStatus::from_label(label).map_or(StatusStyle::DEFAULT, TaskStatus::style)
}

/// Returns the color name for a status label.
///
/// # Examples
///
/// ```
/// use mdtask_protocol::status_color;
///
/// assert_eq!(status_color("Done"), "green");
/// assert_eq!(status_color("Someday"), "white");
/// ```
#[must_use]
pub fn status_color(label: &str) -> &'static str {
    status_style(label).color
}

/// Returns the icon glyph for a status label.
#[must_use]
pub fn status_icon(label: &str) -> &'static str {
    status_style(label).icon
}

/// Formats a status label with its icon, e.g. `"✔ Done"`.
///
/// The label itself is kept verbatim, even when it is not recognized.
///
/// # Examples
///
/// ```
/// use mdtask_protocol::format_status_with_icon;
///
/// assert_eq!(format_status_with_icon("Blocked"), "● Blocked");
/// assert_eq!(format_status_with_icon("Parked"), "○ Parked");
/// ```
#[must_use]
pub fn format_status_with_icon(label: &str) -> String {
    format!("{} {label}", status_icon(label))
}
