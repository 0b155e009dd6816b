//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the mdtask renderer.

use mdtask_protocol::FormatOptions;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Environment variable that forces plain (or terminal) rendering.
pub const PLAIN_ENV_VAR: &str = "MDTASK_PLAIN";

/// The main configuration struct for the mdtask renderer.
///
/// # Examples
///
/// ```
/// use mdtask_config::Config;
/// use mdtask_protocol::FormatOptions;
///
/// // Create a default config
/// let config = Config::default();
/// assert!(!config.plain);
/// assert_eq!(config.checklist, FormatOptions::default());
///
/// // Create a custom config
/// let config = Config {
///     checklist: FormatOptions::default().with_checked_symbol("✓"),
///     plain: true,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How checklist rows are drawn.
    ///
    /// Only the fields that differ from the defaults need to be given.
    #[serde(default)]
    pub checklist: FormatOptions,

    /// Render code paths inline instead of on their own styled lines.
    #[serde(default)]
    pub plain: bool,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./mdtask.json5` or `./mdtask.json`
    /// 2. User: `~/.config/mdtask/config.json5` or `~/.config/mdtask/config.json`
    ///
    /// If no configuration file is found, the defaults are used. The
    /// `MDTASK_PLAIN` environment variable is applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mdtask_config::Config;
    ///
    /// # fn example() -> mdtask_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Plain output: {}", config.plain);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_plain_override(std::env::var(PLAIN_ENV_VAR).ok().as_deref());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment overrides are not applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mdtask_config::Config;
    ///
    /// # fn example() -> mdtask_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies the value of the `MDTASK_PLAIN` variable, if any.
    ///
    /// `1`, `true`, `yes` and `on` enable plain output; `0`, `false`, `no`
    /// and `off` disable it (case-insensitive). Other values are ignored
    /// with a warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdtask_config::Config;
    ///
    /// let mut config = Config::default();
    /// config.apply_plain_override(Some("TRUE"));
    /// assert!(config.plain);
    ///
    /// config.apply_plain_override(Some("sometimes"));
    /// assert!(config.plain);
    ///
    /// config.apply_plain_override(Some("0"));
    /// assert!(!config.plain);
    /// ```
    pub fn apply_plain_override(&mut self, value: Option<&str>) {
        let Some(raw) = value else {
            return;
        };
        match parse_flag(raw) {
            Some(plain) => {
                debug!(plain, "plain output set from {PLAIN_ENV_VAR}");
                self.plain = plain;
            }
            None => warn!(value = raw, "ignoring unrecognized {PLAIN_ENV_VAR} value"),
        }
    }

    /// Validates the configuration.
    ///
    /// Both checklist symbols must be a single printable character and the
    /// padding must consist of whitespace only, otherwise rows would no
    /// longer line up.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFormatOptions`] naming the first
    /// offending field.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdtask_config::Config;
    /// use mdtask_protocol::FormatOptions;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.checklist = FormatOptions::default().with_checked_symbol("done");
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        validate_symbol("checked_symbol", &self.checklist.checked_symbol)?;
        validate_symbol("unchecked_symbol", &self.checklist.unchecked_symbol)?;

        if !self.checklist.padding.chars().all(char::is_whitespace) {
            return Err(ConfigError::InvalidFormatOptions {
                field: "padding",
                reason: format!(
                    "must contain only whitespace, got {:?}",
                    self.checklist.padding
                ),
            });
        }
        Ok(())
    }
}

/// Checks that a checkbox symbol is exactly one printable character.
fn validate_symbol(field: &'static str, symbol: &str) -> Result<()> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() => Ok(()),
        (Some(c), None) => Err(ConfigError::InvalidFormatOptions {
            field,
            reason: format!("control character {c:?} is not allowed"),
        }),
        _ => Err(ConfigError::InvalidFormatOptions {
            field,
            reason: format!("must be exactly one character, got {symbol:?}"),
        }),
    }
}

/// Parses a boolean flag from an environment value.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
