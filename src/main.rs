//! mdtask - Renders a markdown task file for the terminal.
//!
//! This is the main binary: it reads a task document, renders the detail
//! view, and prints it with color tags stripped.
//!
//! ```text
//! mdtask [FILE|-] [STATUS]
//! ```

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, bail};
use mdtask_config::Config;
use mdtask_protocol::TaskStatus;
use mdtask_tui::{RenderSettings, TaskDetail, document_title, render_task_detail, strip_markup};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: mdtask [FILE|-] [STATUS]";

/// Title used when reading from stdin and the document has no H1.
const STDIN_TITLE: &str = "(stdin)";

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let source = args.next();
    if matches!(source.as_deref(), Some("-h" | "--help")) {
        println!("{USAGE}");
        return Ok(());
    }
    let status = args
        .next()
        .unwrap_or_else(|| TaskStatus::ToDo.label().to_string());
    if args.next().is_some() {
        bail!(USAGE);
    }

    let (document, fallback_title) = read_document(source.as_deref())?;
    let config = Config::load().context("failed to load configuration")?;
    let settings = RenderSettings::from_config(&config);

    let title = document_title(&document).unwrap_or(fallback_title);
    debug!(%title, %status, plain = config.plain, "rendering task");

    let task = TaskDetail {
        title: &title,
        status: &status,
        document: &document,
    };

    let mut out = io::stdout().lock();
    for line in render_task_detail(&task, &settings) {
        writeln!(out, "{}", strip_markup(&line)).context("failed to write output")?;
    }
    Ok(())
}

/// Logs go to stderr so they never mix with the rendered task.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads the task document and returns it with a fallback title.
fn read_document(source: Option<&str>) -> anyhow::Result<(String, String)> {
    match source {
        None | Some("-") => {
            let mut document = String::new();
            io::stdin()
                .read_to_string(&mut document)
                .context("failed to read task from stdin")?;
            Ok((document, STDIN_TITLE.to_string()))
        }
        Some(path) => {
            let path = Path::new(path);
            let document = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read task file {}", path.display()))?;
            let title = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
            Ok((document, title))
        }
    }
}
