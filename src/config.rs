//! Configuration for terminals and search defaults
//!
//! Configuration is plain serde data, read from YAML or JSON. Every field has
//! a default, so a file only needs to mention what it changes:
//!
//! ```
//! use scrollback_search::config::Config;
//!
//! let config = Config::from_yaml_str(
//!     "terminal:\n  max_scrollback: 5000\nsearch:\n  case_insensitive: false\n",
//! )
//! .unwrap();
//! assert_eq!(config.terminal.max_scrollback, 5000);
//! assert_eq!(config.terminal.cols, 80);
//! assert!(!config.search.case_insensitive);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cell::TextAttribute;
use crate::color::{Color, NamedColor};
use crate::error::{Error, Result};

/// Terminal geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub cols: usize,
    pub rows: usize,
    /// Scrollback capacity in lines; 0 disables scrollback
    pub max_scrollback: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 24,
            max_scrollback: 10_000,
        }
    }
}

/// Defaults for new search sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub case_insensitive: bool,
    /// Search upwards (towards older output) first
    pub reverse: bool,
    /// Attribute painted over every match by `color_all`
    pub highlight: TextAttribute,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            reverse: false,
            highlight: TextAttribute::new(
                Color::Named(NamedColor::Black),
                Color::Named(NamedColor::Yellow),
            ),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub terminal: TerminalConfig,
    pub search: SearchConfig,
}

impl Config {
    /// Parse and validate YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` files are read as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject values no terminal can be built with
    pub fn validate(&self) -> Result<()> {
        if self.terminal.cols == 0 || self.terminal.rows == 0 {
            return Err(Error::InvalidConfig(format!(
                "terminal size must be non-zero, got {}x{}",
                self.terminal.cols, self.terminal.rows
            )));
        }
        Ok(())
    }
}
