//! Configuration management for the mdtask renderer.
//!
//! This crate handles loading, validating, and persisting configuration
//! from multiple sources (files, environment variables, defaults).
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`MDTASK_PLAIN`)
//! 2. Local config (`./mdtask.json5` or `./mdtask.json`)
//! 3. User config (`~/.config/mdtask/config.json5` or `~/.config/mdtask/config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! Every field is optional; anything left out keeps its default:
//!
//! ```json5
//! {
//!   // Keep code paths inline instead of on their own gray lines
//!   plain: false,
//!   checklist: {
//!     checked_symbol: "✓",
//!     unchecked_symbol: " ",
//!     padding: "  ",
//!   },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use mdtask_config::Config;
//!
//! # fn example() -> mdtask_config::Result<()> {
//! // Load from default locations
//! let config = Config::load()?;
//!
//! println!("Checked rows use [{}]", config.checklist.checked_symbol);
//! println!("Plain output: {}", config.plain);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::{Config, PLAIN_ENV_VAR};
pub use error::{ConfigError, Result};
