//! Logger that forwards to `tracing`

use super::{DEFAULT_FATAL_EXIT_CODE, Logger};

/// Forwards dispatched messages as `tracing` events under the `verdict` target.
///
/// Fatal messages become `error` events carrying `fatal = true`.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    exit_code: i32,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self {
            exit_code: DEFAULT_FATAL_EXIT_CODE,
        }
    }

    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "verdict", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "verdict", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "verdict", "{message}");
    }

    fn fatal(&self, message: &str) {
        tracing::error!(target: "verdict", fatal = true, "{message}");
    }

    fn exit_code(&self) -> i32 {
        self.exit_code
    }
}
