//! Configuration for the JLISP REPL
//!
//! Settings come from an optional TOML file; command-line flags override
//! whatever the file provides. Every field has a default, so an empty file
//! (or no file at all) is a valid configuration.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROMPT: &str = "JLISP> ";
pub const DEFAULT_LOG_FILTER: &str = "jlisp=warn";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Prompt shown before each line
    pub prompt: String,
    /// Print the version banner on startup
    pub show_banner: bool,
    /// Where line history is loaded from and saved to
    pub history_file: Option<PathBuf>,
    pub max_history: usize,
    /// Colorize errors in the terminal
    pub color: bool,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Print the syntax tree of each line before evaluating it
    pub show_tree: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
            history_file: None,
            max_history: 1000,
            color: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            show_tree: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ReplConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Create a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
