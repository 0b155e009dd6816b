//! Code path detection and rendering.
//!
//! Task descriptions reference files inline with backticks
//! (`` `src/cli.rs` ``). In the terminal view those references are pulled
//! out of the sentence and shown on their own gray line, which keeps long
//! paths from breaking up the prose. Backticked identifiers such as
//! `` `parse()` `` or `` `MAX_SIZE` `` are not paths and stay where they are.
//!
//! ```text
//! Modify `src/cli.rs` to add the flag.   ->   Modify  to add the flag.
//!                                             {gray-fg}`src/cli.rs`{/gray-fg}
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::patterns::{backticked_spans, split_lines};

/// A trailing file extension: a dot and at least one non-space,
/// non-separator character, with no call parentheses.
static EXTENSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.[^\s/\\()]+$").expect("extension pattern is valid")
});

/// Returns `true` if `content` looks like a filesystem path or file name.
///
/// A path either contains a separator (`/` or `\`) or ends with a file
/// extension. Plain numbers (`123`, `3.14`) are never paths.
///
/// # Examples
///
/// ```
/// use mdtask_tui::code_path::is_code_path;
///
/// assert!(is_code_path("src/utils"));
/// assert!(is_code_path("package.json"));
/// assert!(is_code_path(r"C:\Users\me"));
/// assert!(!is_code_path("variable"));
/// assert!(!is_code_path("render()"));
/// assert!(!is_code_path("123"));
/// ```
#[must_use]
pub fn is_code_path(content: &str) -> bool {
    if content.contains('/') || content.contains('\\') {
        return true;
    }
    if content.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return false;
    }
    EXTENSION_RE.is_match(content)
}

/// Returns the contents of every backticked code path in `text`.
///
/// Paths are returned left to right; duplicates are kept.
///
/// # Examples
///
/// ```
/// use mdtask_tui::code_path::extract_code_paths;
///
/// let paths = extract_code_paths("Check `src/cli.ts` and `package.json` for details.");
/// assert_eq!(paths, vec!["src/cli.ts", "package.json"]);
/// ```
#[must_use]
pub fn extract_code_paths(text: &str) -> Vec<String> {
    backticked_spans(text)
        .filter(|span| is_code_path(span.content))
        .map(|span| span.content.to_string())
        .collect()
}

/// Wraps a path in gray foreground tags, keeping its backticks.
///
/// # Examples
///
/// ```
/// use mdtask_tui::code_path::style_code_path;
///
/// assert_eq!(style_code_path("src/main.rs"), "{gray-fg}`src/main.rs`{/gray-fg}");
/// ```
#[must_use]
pub fn style_code_path(path: &str) -> String {
    format!("{{gray-fg}}`{path}`{{/gray-fg}}")
}

/// Moves backticked code paths onto their own styled lines.
///
/// For each line holding at least one code path, the paths are cut out of
/// the prose, the remaining prose is trimmed, and one styled line per path
/// follows it. If nothing but whitespace remains, the prose line is
/// omitted. Lines without code paths keep their content; line breaks
/// (`\n`, `\r\n` or a lone `\r`) come back as `\n`.
///
/// Text without any code path, including empty text, is borrowed back
/// unchanged. Absent text is handled by the caller with
/// `Option::map`, which keeps it absent.
///
/// # Examples
///
/// ```
/// use mdtask_tui::code_path::transform_code_paths;
///
/// let out = transform_code_paths("Modify `src/cli.ts` and `src/ui/board.ts` to implement the feature.");
/// assert_eq!(
///     out,
///     "Modify  and  to implement the feature.\n\
///      {gray-fg}`src/cli.ts`{/gray-fg}\n\
///      {gray-fg}`src/ui/board.ts`{/gray-fg}"
/// );
///
/// assert_eq!(transform_code_paths(""), "");
/// assert_eq!(None::<&str>.map(transform_code_paths), None);
/// ```
#[must_use]
pub fn transform_code_paths(text: &str) -> Cow<'_, str> {
    if !backticked_spans(text).any(|span| is_code_path(span.content)) {
        return Cow::Borrowed(text);
    }

    let mut out: Vec<Cow<'_, str>> = Vec::new();
    for line in split_lines(text) {
        let paths: Vec<_> = backticked_spans(line)
            .filter(|span| is_code_path(span.content))
            .collect();

        if paths.is_empty() {
            out.push(Cow::Borrowed(line));
            continue;
        }

        trace!(count = paths.len(), "extracting code paths from line");

        let mut prose = String::with_capacity(line.len());
        let mut cursor = 0;
        for span in &paths {
            prose.push_str(&line[cursor..span.range.start]);
            cursor = span.range.end;
        }
        prose.push_str(&line[cursor..]);

        let prose = prose.trim();
        if !prose.is_empty() {
            out.push(Cow::Owned(prose.to_string()));
        }
        out.extend(paths.iter().map(|span| Cow::Owned(style_code_path(span.content))));
    }

    Cow::Owned(out.join("\n"))
}

/// Leaves code paths inline, exactly as written.
///
/// This is the rendering used when terminal styling is unavailable. It has
/// the same empty/absent contract as [`transform_code_paths`].
#[must_use]
pub fn transform_code_paths_plain(text: &str) -> Cow<'_, str> {
    Cow::Borrowed(text)
}

/// How code paths are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Paths are pulled onto their own gray lines.
    #[default]
    Terminal,
    /// Paths stay inline; no markup is emitted.
    Plain,
}

impl RenderMode {
    /// Returns the mode for a `plain` flag.
    #[must_use]
    pub const fn from_plain(plain: bool) -> Self {
        if plain { Self::Plain } else { Self::Terminal }
    }

    /// Applies this mode's code path transformation to `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdtask_tui::code_path::RenderMode;
    ///
    /// let text = "Edit `lib.rs`.";
    /// assert_eq!(RenderMode::Plain.transform(text), text);
    /// assert_eq!(RenderMode::Terminal.transform(text), "Edit .\n{gray-fg}`lib.rs`{/gray-fg}");
    /// ```
    #[must_use]
    pub fn transform(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Terminal => transform_code_paths(text),
            Self::Plain => transform_code_paths_plain(text),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Plain mode never changes its input.
        #[test]
        fn plain_mode_identity(text in "\\PC{0,80}") {
            prop_assert_eq!(transform_code_paths_plain(&text), text.as_str());
        }

        /// Every extracted path shows up as a styled line, in order.
        #[test]
        fn terminal_mode_emits_one_line_per_path(
            words in prop::collection::vec("[a-z]{1,8}", 1..6),
            paths in prop::collection::vec("[a-z]{1,6}/[a-z]{1,6}\\.rs", 0..4),
        ) {
            let mut line = words.join(" ");
            for path in &paths {
                line.push_str(&format!(" `{path}`"));
            }
            let out = transform_code_paths(&line);
            let styled: Vec<&str> = out.lines().filter(|l| l.starts_with("{gray-fg}")).collect();
            let expected: Vec<String> = paths.iter().map(|p| style_code_path(p)).collect();
            prop_assert_eq!(styled, expected);
        }

        /// Purely numeric content is never a path.
        #[test]
        fn numbers_are_not_paths(n in 0u32..1_000_000, frac in proptest::option::of(0u32..1000)) {
            let content = match frac {
                Some(f) => format!("{n}.{f}"),
                None => n.to_string(),
            };
            prop_assert!(!is_code_path(&content));
        }
    }
}
