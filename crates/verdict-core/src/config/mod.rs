//! Configuration for status logging

mod env_loader;
mod error;
mod file_loader;
mod logger_config;

pub use env_loader::{ENV_FATAL_EXIT_CODE, ENV_LOGGER};
pub use error::ConfigError;
pub use logger_config::{LoggerConfig, LoggerKind};
