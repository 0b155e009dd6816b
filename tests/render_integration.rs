//! Integration tests for the mdtask workspace.
//!
//! These exercise the config crate and the renderer together, and run the
//! `mdtask` binary end to end.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use mdtask_config::Config;
use mdtask_tui::{RenderSettings, TaskDetail, document_title, render_task_detail, strip_markup};
use tempfile::TempDir;

const TASK: &str = "\
# task-7 - Align criteria

## Description

Touch `crates/tui/src/acceptance.rs` and nothing else.

## Acceptance Criteria

- [x] Checked rows keep their state
- [ ]   Extra spaces collapse
Manual check on a narrow terminal.
";

fn render(config: &Config, status: &str) -> Vec<String> {
    let title = document_title(TASK).unwrap();
    let task = TaskDetail {
        title: &title,
        status,
        document: TASK,
    };
    render_task_detail(&task, &RenderSettings::from_config(config))
        .iter()
        .map(|line| strip_markup(line))
        .collect()
}

/// Runs the binary in `dir` with no user config visible.
fn mdtask(dir: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_mdtask"));
    command
        .current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env("HOME", dir.path())
        .env_remove("MDTASK_PLAIN")
        .env_remove("RUST_LOG");
    command
}

#[test]
fn config_from_json5_drives_rendering() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mdtask.json5");
    fs::write(
        &path,
        r#"
        {
            // Checkmarks for finished rows
            checklist: { checked_symbol: "✓", padding: "  " },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let lines = render(&config, "Done");

    assert_eq!(lines[0], "Title: task-7 - Align criteria");
    assert_eq!(lines[1], "Status: ✔ Done");
    assert!(lines.contains(&"Touch  and nothing else.".to_string()));
    assert!(lines.contains(&"`crates/tui/src/acceptance.rs`".to_string()));
    assert_eq!(
        lines[lines.len() - 3..],
        [
            "  [✓] Checked rows keep their state",
            "  [ ] Extra spaces collapse",
            "  Manual check on a narrow terminal.",
        ]
    );
}

#[test]
fn plain_config_keeps_paths_inline() {
    let config = Config {
        plain: true,
        ..Config::default()
    };
    let lines = render(&config, "Blocked");

    assert_eq!(lines[1], "Status: ● Blocked");
    assert!(lines.contains(&"Touch `crates/tui/src/acceptance.rs` and nothing else.".to_string()));
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let original = Config {
        plain: true,
        ..Config::default()
    };
    original.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), original);
}

#[test]
fn config_load_nonexistent_fails() {
    assert!(Config::load_from("/nonexistent/path/config.json").is_err());
}

#[test]
fn binary_renders_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("task-7.md");
    fs::write(&path, TASK).unwrap();

    let output = mdtask(&dir).arg(&path).arg("Review").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Title: task-7 - Align criteria");
    assert_eq!(lines[1], "Status: ◆ Review");
    assert!(lines.contains(&"`crates/tui/src/acceptance.rs`"));
    assert!(!stdout.contains("{gray-fg}"));
}

#[test]
fn binary_reads_stdin_with_defaults() {
    let dir = TempDir::new().unwrap();

    let mut child = mdtask(&dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"- [ ] no headings here\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Title: (stdin)\nStatus: ○ To Do\n\nDescription:\nNo description\n"
    );
}

#[test]
fn binary_uses_local_config_and_env_override() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("mdtask.json"), r#"{"plain": false}"#).unwrap();
    let path = dir.path().join("task.md");
    fs::write(&path, TASK).unwrap();

    let output = mdtask(&dir)
        .arg(&path)
        .env("MDTASK_PLAIN", "1")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Touch `crates/tui/src/acceptance.rs` and nothing else."));
}

#[test]
fn binary_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mdtask.json5"),
        r#"{ checklist: { padding: "->" } }"#,
    )
    .unwrap();
    let path = dir.path().join("task.md");
    fs::write(&path, TASK).unwrap();

    let output = mdtask(&dir).arg(&path).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("padding"));
}
