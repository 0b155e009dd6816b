//! Markdown-to-terminal rendering for task files.
//!
//! This crate turns the markdown body of a task file into text ready for a
//! terminal: checklists are parsed and re-aligned, the acceptance criteria
//! section is extracted, backticked file paths are pulled onto their own
//! styled lines, and statuses get an icon and a color.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`patterns`]: Shared regular expressions and line splitting
//! - [`checklist`]: Checkbox line parsing and formatting
//! - [`section`]: Locating named sections in a document
//! - [`acceptance`]: Acceptance criteria extraction and alignment
//! - [`code_path`]: Detection and styling of backticked code paths
//! - [`markup`]: Conversion of inline color tags into ratatui text
//! - [`widgets`]: The task detail view
//!
//! # Example
//!
//! ```
//! use mdtask_tui::{RenderSettings, TaskDetail, render_task_detail};
//!
//! let document = "\
//! # task-1 - Ship it
//!
//! ## Description
//! Touch `src/main.rs` only.
//!
//! ## Acceptance Criteria
//! - [x] Builds
//! - [ ] Released
//! ";
//!
//! let task = TaskDetail {
//!     title: "task-1 - Ship it",
//!     status: "In Progress",
//!     document,
//! };
//! let lines = render_task_detail(&task, &RenderSettings::default());
//! assert_eq!(lines[1], "Status: ◒ In Progress");
//! assert!(lines.contains(&"{gray-fg}`src/main.rs`{/gray-fg}".to_string()));
//! assert!(lines.contains(&" [ ] Released".to_string()));
//! ```

pub mod acceptance;
pub mod checklist;
pub mod code_path;
pub mod markup;
pub mod patterns;
pub mod section;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary operations at crate root for convenience
pub use acceptance::{align_acceptance_criteria, extract_and_format_acceptance_criteria};
pub use checklist::{format_checklist, format_checklist_item, parse_checkbox_lines};
pub use code_path::{
    RenderMode, extract_code_paths, is_code_path, transform_code_paths,
    transform_code_paths_plain,
};
pub use markup::{parse_markup, strip_markup};
pub use section::{document_title, extract_section};
pub use widgets::{RenderSettings, TaskDetail, render_task_detail, render_task_detail_lines};
