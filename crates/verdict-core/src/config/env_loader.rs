//! Environment variable-based configuration loading

use super::error::ConfigError;
use super::logger_config::{LoggerConfig, LoggerKind};

/// Selects the process-wide logger (`console` or `tracing`)
pub const ENV_LOGGER: &str = "VERDICT_LOGGER";
/// Exit code used after a fatal message
pub const ENV_FATAL_EXIT_CODE: &str = "VERDICT_FATAL_EXIT_CODE";

/// Override `config` with whichever variables `lookup` provides
pub(super) fn apply_overrides<F>(config: &mut LoggerConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(kind) = lookup(ENV_LOGGER) {
        config.kind = kind.parse::<LoggerKind>()?;
    }

    if let Some(code) = lookup(ENV_FATAL_EXIT_CODE) {
        config.fatal_exit_code = code
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid_value(ENV_FATAL_EXIT_CODE, code.as_str()))?;
    }

    Ok(())
}
