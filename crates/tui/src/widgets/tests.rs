//! Snapshot tests for widget rendering.
//!
//! These tests use insta to capture and verify the text output of widgets.

use mdtask_protocol::FormatOptions;

use super::{RenderSettings, TaskDetail, render_task_detail, render_task_detail_lines};
use crate::code_path::RenderMode;
use crate::test_utils::lines_to_string;

/// A task document exercising every part of the detail view.
const SAMPLE_TASK: &str = "\
# task-12 - Pull code paths out of descriptions

## Description

Update `src/render.rs` so paths render on their own line.
Keep `Vec<String>` inline.

## Acceptance Criteria

- [x] Paths are extracted in order
-[ ]  Identifiers stay inline
Reviewed by the CLI team.

## Implementation Notes

Nothing yet.
";

fn sample_task(status: &str) -> TaskDetail<'_> {
    TaskDetail {
        title: "task-12 - Pull code paths out of descriptions",
        status,
        document: SAMPLE_TASK,
    }
}

fn plain() -> RenderSettings {
    RenderSettings {
        mode: RenderMode::Plain,
        ..RenderSettings::default()
    }
}

#[test]
fn snapshot_detail_terminal() {
    let lines = render_task_detail_lines(&sample_task("In Progress"), &RenderSettings::default());

    insta::assert_snapshot!(lines_to_string(&lines), @r"
    Title: task-12 - Pull code paths out of descriptions
    Status: ◒ In Progress

    Description:
    Update  so paths render on their own line.
    `src/render.rs`
    Keep `Vec<String>` inline.

    Acceptance Criteria:
     [x] Paths are extracted in order
     [ ] Identifiers stay inline
     Reviewed by the CLI team.
    ");
}

#[test]
fn snapshot_detail_terminal_markup() {
    let lines = render_task_detail(&sample_task("Review"), &RenderSettings::default());

    insta::assert_snapshot!(lines.join("\n"), @r"
    Title: task-12 - Pull code paths out of descriptions
    Status: ◆ Review

    Description:
    Update  so paths render on their own line.
    {gray-fg}`src/render.rs`{/gray-fg}
    Keep `Vec<String>` inline.

    Acceptance Criteria:
     [x] Paths are extracted in order
     [ ] Identifiers stay inline
     Reviewed by the CLI team.
    ");
}

#[test]
fn snapshot_detail_plain() {
    let lines = render_task_detail(&sample_task("Done"), &plain());

    insta::assert_snapshot!(lines.join("\n"), @r"
    Title: task-12 - Pull code paths out of descriptions
    Status: ✔ Done

    Description:
    Update `src/render.rs` so paths render on their own line.
    Keep `Vec<String>` inline.

    Acceptance Criteria:
     [x] Paths are extracted in order
     [ ] Identifiers stay inline
     Reviewed by the CLI team.
    ");
}

#[test]
fn snapshot_detail_custom_checklist() {
    let settings = RenderSettings {
        checklist: FormatOptions::default()
            .with_checked_symbol("✓")
            .with_unchecked_symbol("·")
            .with_padding("  "),
        ..plain()
    };
    let lines = render_task_detail(&sample_task("Testing"), &settings);

    insta::assert_snapshot!(lines[7..].join("\n"), @r"
    Acceptance Criteria:
      [✓] Paths are extracted in order
      [·] Identifiers stay inline
      Reviewed by the CLI team.
    ");
}

#[test]
fn snapshot_detail_empty_document() {
    let task = TaskDetail {
        title: "Bare",
        status: "Someday",
        document: "",
    };
    let lines = render_task_detail(&task, &RenderSettings::default());

    insta::assert_snapshot!(lines.join("\n"), @r"
    Title: Bare
    Status: ○ Someday

    Description:
    No description
    ");
}
