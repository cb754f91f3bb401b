//! Logger configuration

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::{env_loader, file_loader};
use crate::logger::DEFAULT_FATAL_EXIT_CODE;

/// Which logger backs the process-wide default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerKind {
    /// `[LEVEL] message` lines on standard output
    #[default]
    #[serde(alias = "stdout")]
    Console,
    /// Events through the `tracing` subscriber
    Tracing,
}

impl LoggerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Tracing => "tracing",
        }
    }
}

impl fmt::Display for LoggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoggerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" | "stdout" => Ok(Self::Console),
            "tracing" => Ok(Self::Tracing),
            _ => Err(ConfigError::invalid_value("logger", s)),
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Logger installed as the process-wide default
    pub kind: LoggerKind,
    /// Exit code after a fatal message
    pub fatal_exit_code: i32,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            kind: LoggerKind::Console,
            fatal_exit_code: DEFAULT_FATAL_EXIT_CODE,
        }
    }
}

impl LoggerConfig {
    /// Load from a JSON, TOML or YAML file (by extension).
    ///
    /// A missing file yields the default configuration.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        file_loader::load_from_file(path)
    }

    /// Load from `VERDICT_LOGGER` and `VERDICT_FATAL_EXIT_CODE`
    pub fn load_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup, starting from the defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        env_loader::apply_overrides(&mut config, lookup)?;
        Ok(config)
    }

    /// File settings (when a path is given) overridden by environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        env_loader::apply_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Merge with another logger config; `other` wins where it differs from
    /// the defaults
    pub fn merge(&mut self, other: LoggerConfig) {
        let defaults = Self::default();
        if other.kind != defaults.kind {
            self.kind = other.kind;
        }
        if other.fatal_exit_code != defaults.fatal_exit_code {
            self.fatal_exit_code = other.fatal_exit_code;
        }
    }
}
