//! Task detail widget.
//!
//! Builds the content of the task detail view from a raw task document:
//! the title, the status with its icon, the `Description` section with
//! code paths rendered per [`RenderMode`], and the aligned acceptance
//! criteria.
//!
//! # Layout
//!
//! ```text
//! Title: task-12 - Pull code paths out of descriptions
//! Status: ◒ In Progress
//!
//! Description:
//! Update  so paths render on their own line.
//! `src/render.rs`
//!
//! Acceptance Criteria:
//!  [x] Paths are extracted in order
//!  [ ] Identifiers stay inline
//! ```
//!
//! The acceptance criteria block is left out when the document has no such
//! section.

use mdtask_config::Config;
use mdtask_protocol::{FormatOptions, format_status_with_icon, status_style};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::acceptance::extract_and_format_acceptance_criteria_with;
use crate::code_path::RenderMode;
use crate::markup::{parse_markup, status_color_to_color};
use crate::section::extract_section;

/// Heading text of the description section.
pub const DESCRIPTION_HEADING: &str = "Description";

/// Placeholder shown when a task has no description.
const NO_DESCRIPTION: &str = "No description";

/// The task fields the detail view needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDetail<'a> {
    /// Task title as shown in the header.
    pub title: &'a str,
    /// Free-text status label (e.g. `"In Progress"`).
    pub status: &'a str,
    /// The full markdown body of the task file.
    pub document: &'a str,
}

/// Rendering choices for the detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSettings {
    /// How code paths in the description are shown.
    pub mode: RenderMode,
    /// How acceptance criteria checkboxes are drawn.
    pub checklist: FormatOptions,
}

impl RenderSettings {
    /// Derives render settings from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            mode: RenderMode::from_plain(config.plain),
            checklist: config.checklist.clone(),
        }
    }
}

impl From<&Config> for RenderSettings {
    fn from(config: &Config) -> Self {
        Self::from_config(config)
    }
}

/// One row of the detail view, before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    Title(String),
    Status(String),
    Blank,
    Header(&'static str),
    Body(String),
    Placeholder(&'static str),
}

/// Builds the unstyled rows for `task`.
fn build_rows(task: &TaskDetail<'_>, settings: &RenderSettings) -> Vec<Row> {
    let mut rows = vec![
        Row::Title(task.title.to_string()),
        Row::Status(task.status.to_string()),
        Row::Blank,
        Row::Header("Description:"),
    ];

    let description = extract_section(task.document, DESCRIPTION_HEADING)
        .map(|body| body.trim_matches(|c: char| c == '\n' || c == '\r'))
        .filter(|body| !body.trim().is_empty());

    if let Some(body) = description {
        let rendered = settings.mode.transform(body);
        rows.extend(rendered.lines().map(|line| Row::Body(line.to_string())));
    } else {
        rows.push(Row::Placeholder(NO_DESCRIPTION));
    }

    let criteria = extract_and_format_acceptance_criteria_with(task.document, &settings.checklist);
    if !criteria.is_empty() {
        rows.push(Row::Blank);
        rows.push(Row::Header("Acceptance Criteria:"));
        rows.extend(criteria.into_iter().map(Row::Body));
    }

    rows
}

/// Renders the detail view as tagged text lines.
///
/// In [`RenderMode::Terminal`], description lines may carry color tags
/// (see [`crate::markup`]); in [`RenderMode::Plain`] they never do.
///
/// # Examples
///
/// ```
/// use mdtask_tui::widgets::{RenderSettings, TaskDetail, render_task_detail};
///
/// let task = TaskDetail {
///     title: "Write docs",
///     status: "Done",
///     document: "## Acceptance Criteria\n- [x] README updated\n",
/// };
/// let lines = render_task_detail(&task, &RenderSettings::default());
/// assert_eq!(lines[1], "Status: ✔ Done");
/// assert_eq!(lines.last().map(String::as_str), Some(" [x] README updated"));
/// ```
#[must_use]
pub fn render_task_detail(task: &TaskDetail<'_>, settings: &RenderSettings) -> Vec<String> {
    build_rows(task, settings)
        .into_iter()
        .map(|row| match row {
            Row::Title(title) => format!("Title: {title}"),
            Row::Status(status) => format!("Status: {}", format_status_with_icon(&status)),
            Row::Blank => String::new(),
            Row::Header(text) | Row::Placeholder(text) => text.to_string(),
            Row::Body(text) => text,
        })
        .collect()
}

/// Renders the detail view as styled ratatui lines.
///
/// The status icon and label take the status color; tagged description
/// lines are converted with [`parse_markup`].
#[must_use]
pub fn render_task_detail_lines(
    task: &TaskDetail<'_>,
    settings: &RenderSettings,
) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(Color::DarkGray);
    let header_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    build_rows(task, settings)
        .into_iter()
        .map(|row| match row {
            Row::Title(title) => Line::from(vec![
                Span::styled("Title: ", label_style),
                Span::styled(
                    title,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Row::Status(status) => {
                let style = status_style(&status);
                let color = status_color_to_color(style.color);
                Line::from(vec![
                    Span::styled("Status: ", label_style),
                    Span::styled(format!("{} ", style.icon), Style::default().fg(color)),
                    Span::styled(status, Style::default().fg(color)),
                ])
            }
            Row::Blank => Line::from(""),
            Row::Header(text) | Row::Placeholder(text) => {
                Line::from(Span::styled(text, header_style))
            }
            Row::Body(text) => parse_markup(&text),
        })
        .collect()
}
