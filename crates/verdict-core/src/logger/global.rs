//! Process-wide default logger

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::{ConsoleLogger, Logger, TracingLogger};
use crate::config::{LoggerConfig, LoggerKind};

/// Thread-safe handle to a logger
pub type SharedLogger = Arc<dyn Logger + Send + Sync>;

static GLOBAL_LOGGER: Lazy<RwLock<SharedLogger>> =
    Lazy::new(|| RwLock::new(Arc::new(ConsoleLogger::default())));

/// The current process-wide logger
pub fn global() -> SharedLogger {
    Arc::clone(&GLOBAL_LOGGER.read())
}

/// Replace the process-wide logger.
///
/// Intended for startup; callers must not swap it while other threads are
/// dispatching.
pub fn set_global(logger: SharedLogger) {
    tracing::debug!("replacing process-wide status logger");
    *GLOBAL_LOGGER.write() = logger;
}

/// Build the logger described by `config`
pub fn build(config: &LoggerConfig) -> SharedLogger {
    match config.kind {
        LoggerKind::Console => {
            Arc::new(ConsoleLogger::default().with_exit_code(config.fatal_exit_code))
        }
        LoggerKind::Tracing => {
            Arc::new(TracingLogger::new().with_exit_code(config.fatal_exit_code))
        }
    }
}

/// Install the logger described by `config` as the process-wide logger
pub fn init(config: &LoggerConfig) {
    set_global(build(config));
}
