//! Checklist types shared by the parser and the formatter.
//!
//! A task file records its checklists as markdown task-list lines
//! (`- [x] done thing`). The renderer parses those lines into
//! [`ChecklistItem`]s and formats them back into aligned display rows
//! according to a [`FormatOptions`] value.

use serde::{Deserialize, Serialize};

/// A single checkbox entry parsed from a markdown line.
///
/// One item is produced per recognized line, in document order.
///
/// # Examples
///
/// ```
/// use mdtask_protocol::ChecklistItem;
///
/// let item = ChecklistItem::new("Ship it", false);
/// assert_eq!(item.text, "Ship it");
/// assert!(!item.checked);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// The trimmed content following the checkbox marker.
    pub text: String,
    /// Whether the marker was `x` or `X`.
    pub checked: bool,
}

impl ChecklistItem {
    /// Creates a new checklist item.
    #[must_use]
    pub fn new(text: impl Into<String>, checked: bool) -> Self {
        Self {
            text: text.into(),
            checked,
        }
    }
}

/// Options controlling how checklist items are rendered.
///
/// Every field has a documented default, and any subset of fields may be
/// overridden. When deserialized, missing fields fall back to their
/// defaults, so a configuration file only needs to name what it changes.
///
/// | Field | Default |
/// |-------|---------|
/// | `checked_symbol` | `"x"` |
/// | `unchecked_symbol` | `" "` |
/// | `padding` | `" "` |
///
/// # Examples
///
/// ```
/// use mdtask_protocol::FormatOptions;
///
/// let options: FormatOptions = serde_json::from_str(r#"{"checked_symbol": "✓"}"#).unwrap();
/// assert_eq!(options.checked_symbol, "✓");
/// assert_eq!(options.unchecked_symbol, " ");
/// assert_eq!(options.padding, " ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Symbol placed between the brackets of a checked item.
    pub checked_symbol: String,
    /// Symbol placed between the brackets of an unchecked item.
    pub unchecked_symbol: String,
    /// Leading text placed before the opening bracket of every row.
    pub padding: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            checked_symbol: Self::DEFAULT_CHECKED_SYMBOL.to_string(),
            unchecked_symbol: Self::DEFAULT_UNCHECKED_SYMBOL.to_string(),
            padding: Self::DEFAULT_PADDING.to_string(),
        }
    }
}

impl FormatOptions {
    /// Default symbol for checked items.
    pub const DEFAULT_CHECKED_SYMBOL: &'static str = "x";

    /// Default symbol for unchecked items.
    pub const DEFAULT_UNCHECKED_SYMBOL: &'static str = " ";

    /// Default leading padding.
    pub const DEFAULT_PADDING: &'static str = " ";

    /// Overrides the checked symbol.
    #[must_use]
    pub fn with_checked_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.checked_symbol = symbol.into();
        self
    }

    /// Overrides the unchecked symbol.
    #[must_use]
    pub fn with_unchecked_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.unchecked_symbol = symbol.into();
        self
    }

    /// Overrides the leading padding.
    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Returns the symbol to place between the brackets for `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdtask_protocol::{ChecklistItem, FormatOptions};
    ///
    /// let options = FormatOptions::default();
    /// assert_eq!(options.symbol_for(&ChecklistItem::new("a", true)), "x");
    /// assert_eq!(options.symbol_for(&ChecklistItem::new("b", false)), " ");
    /// ```
    #[must_use]
    pub fn symbol_for(&self, item: &ChecklistItem) -> &str {
        if item.checked {
            &self.checked_symbol
        } else {
            &self.unchecked_symbol
        }
    }

    /// Returns the character column of the opening bracket.
    ///
    /// This is the same for every row rendered with these options.
    #[must_use]
    pub fn bracket_column(&self) -> usize {
        self.padding.chars().count()
    }
}
