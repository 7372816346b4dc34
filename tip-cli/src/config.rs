//! Front-end settings.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags.

use std::{fmt, fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings read from the config file. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Symbol printed in front of monetary values.
    pub currency_symbol: String,
    /// Whether the history panel starts visible.
    pub show_history: bool,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Append log output to this file as well as stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            show_history: false,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub show_history: bool,
}

impl AppConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid config file")
    }

    /// Reads the file at `path`, or returns defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in '{}'", path.display()))
    }

    pub fn apply(
        mut self,
        overrides: ConfigOverrides,
    ) -> Self {
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(file) = overrides.log_file {
            self.log_file = Some(file);
        }
        self.show_history |= overrides.show_history;
        self
    }
}

impl fmt::Display for AppConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Currency:     {}", self.currency_symbol)?;
        writeln!(f, "Show history: {}", self.show_history)?;
        writeln!(f, "Log level:    {}", self.log_level)?;
        write!(
            f,
            "Log file:     {}",
            self.log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "—".to_string())
        )
    }
}
