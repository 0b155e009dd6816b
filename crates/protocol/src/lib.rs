//! Shared protocol types for the mdtask application.
//!
//! This crate defines the plain data exchanged between the markdown
//! rendering engine and its callers: checklist items, the checklist
//! formatting options, and the fixed task status vocabulary.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`checklist`]: The `ChecklistItem` record and `FormatOptions`
//! - [`status`]: Task statuses, their icon/color styles, and label lookups
//!
//! # Examples
//!
//! ```
//! use mdtask_protocol::{ChecklistItem, FormatOptions, format_status_with_icon};
//!
//! let item = ChecklistItem::new("Write the parser", true);
//! assert!(item.checked);
//!
//! let options = FormatOptions::default().with_checked_symbol("✓");
//! assert_eq!(options.symbol_for(&item), "✓");
//!
//! assert_eq!(format_status_with_icon("Done"), "✔ Done");
//! ```

pub mod checklist;
pub mod status;

// Re-export primary types at crate root for convenience
pub use checklist::{ChecklistItem, FormatOptions};
pub use status::{
    StatusStyle, TaskStatus, format_status_with_icon, status_color, status_icon, status_style,
};
