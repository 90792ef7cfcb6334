//! Logger setup.
//!
//! Everything in the workspace logs through the `log` facade; this module
//! installs the single `fern` dispatcher that formats records and sends them
//! to stdout plus any extra outputs (the development console registers one).

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `[log]` section of the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    /// Per-target overrides, e.g. `gamework_inspector = "trace"`.
    pub targets: Vec<(String, String)>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            targets: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unknown log level '{0}'")]
    UnknownLevel(String),
    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    LevelFilter::from_str(level).map_err(|_| LoggingError::UnknownLevel(level.to_string()))
}

/// Build the dispatcher without installing it.
pub fn dispatch(config: &LogConfig) -> Result<fern::Dispatch, LoggingError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(parse_level(&config.level)?);
    for (target, level) in &config.targets {
        dispatch = dispatch.level_for(target.clone(), parse_level(level)?);
    }
    Ok(dispatch)
}

/// Install the global logger: stdout plus `extra` outputs.
pub fn init(config: &LogConfig, extra: Vec<fern::Output>) -> Result<(), LoggingError> {
    let mut dispatch = dispatch(config)?.chain(std::io::stdout());
    for output in extra {
        dispatch = dispatch.chain(output);
    }
    dispatch.apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_level() {
        let config = LogConfig {
            level: "loud".to_string(),
            targets: Vec::new(),
        };
        assert!(matches!(dispatch(&config), Err(LoggingError::UnknownLevel(l)) if l == "loud"));
    }

    #[test]
    fn accepts_target_overrides() {
        let config = LogConfig {
            level: "warn".to_string(),
            targets: vec![("gamework_inspector".to_string(), "TRACE".to_string())],
        };
        assert!(dispatch(&config).is_ok());
    }
}
