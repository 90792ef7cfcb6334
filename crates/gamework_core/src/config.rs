//! Workspace configuration loaded from TOML.
//!
//! Every section is optional; missing keys fall back to their defaults.
//!
//! ```toml
//! [log]
//! level = "debug"
//!
//! [draw]
//! segments = 48
//!
//! [console]
//! max_lines = 200
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::draw::DrawSettings;
use crate::logging::LogConfig;

/// `[console]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Output lines kept before the oldest are dropped.
    pub max_lines: usize,
    /// Submitted lines remembered for up/down recall.
    pub history: usize,
    pub prompt: String,
    /// Whether the console starts visible.
    pub open_on_start: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            max_lines: 128,
            history: 32,
            prompt: "> ".to_string(),
            open_on_start: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoundationConfig {
    pub log: LogConfig,
    pub draw: DrawSettings,
    pub console: ConsoleConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl FoundationConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = FoundationConfig::from_toml_str("").unwrap();
        assert_eq!(config, FoundationConfig::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = FoundationConfig::from_toml_str(
            r#"
            [log]
            level = "debug"

            [draw]
            segments = 48

            [console]
            max_lines = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.draw.segments, 48);
        assert_eq!(config.draw.dash_size, DrawSettings::default().dash_size);
        assert_eq!(config.console.max_lines, 10);
        assert_eq!(config.console.prompt, "> ");
    }

    #[test]
    fn malformed_is_parse_error() {
        let err = FoundationConfig::from_toml_str("[draw]\nsegments = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FoundationConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
