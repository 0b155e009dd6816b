//! Widget components for the mdtask terminal view.
//!
//! Each widget is a pure function from task data to text, so it can be
//! printed directly or handed to ratatui as styled [`Line`](ratatui::text::Line)s.
//!
//! # Modules
//!
//! - [`detail`]: Renders a single task with its description and criteria
//!
//! # Status Colors
//!
//! The status line takes its color from the status label:
//!
//! | Status | Icon | Color |
//! |--------|------|-------|
//! | `Done` | ✔ | Green (`Color::Green`) |
//! | `In Progress` | ◒ | Yellow (`Color::Yellow`) |
//! | `Blocked` | ● | Red (`Color::Red`) |
//! | `To Do` | ○ | White (`Color::White`) |
//! | `Review` | ◆ | Blue (`Color::Blue`) |
//! | `Testing` | ▣ | Cyan (`Color::Cyan`) |
//!
//! Any other label renders as `To Do` does.

pub mod detail;

// Re-export primary rendering functions for convenience
pub use detail::{
    DESCRIPTION_HEADING, RenderSettings, TaskDetail, render_task_detail, render_task_detail_lines,
};

#[cfg(test)]
mod tests;
