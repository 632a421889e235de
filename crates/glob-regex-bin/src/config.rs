//! Loading of default glob options from a TOML file.
//!
//! ```toml
//! [glob]
//! os = "windows"
//! case-insensitive = true
//! ```

use std::path::Path;

use glob_regex::GlobOptions;
use serde::Deserialize;
use thiserror::Error;

/// The contents of a configuration file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Options used when the command line does not override them.
    #[serde(default)]
    pub glob: GlobOptions,
}

#[derive(Error, Debug)]
pub enum LoadError {
    /// IO error while reading configuration file.
    #[error("IO error while reading configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing configuration file.
    #[error("Error parsing configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl Config {
    /// Reads the configuration from the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = fs_err::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }
}
