//! Logging capability
//!
//! A [`Logger`] is the sink statuses are dispatched to. Dispatch itself is
//! pure: it calls exactly one sink method and returns a [`LogOutcome`]. Only
//! [`LogOutcome::exit_if_fatal`] ends the process, so tests can pass a
//! recording logger and inspect the outcome instead.
//!
//! A process-wide default (a [`ConsoleLogger`]) backs [`Status::log`] and
//! [`log`]; hosts replace it at startup with [`set_global`] or [`init`].
//!
//! [`Status::log`]: crate::Status::log

mod console;
mod dispatch;
mod global;
mod tracing_logger;

pub use console::{ConsoleLogger, WriterLogger};
pub use dispatch::{LogOutcome, log, log_to};
pub use global::{SharedLogger, build, global, init, set_global};
pub use tracing_logger::TracingLogger;

/// Exit code used for fatal dispatch unless a logger says otherwise
pub const DEFAULT_FATAL_EXIT_CODE: i32 = 1;

/// Sink for dispatched status messages
#[cfg_attr(test, mockall::automock)]
pub trait Logger {
    fn debug(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);

    /// Emit a fatal message. Stopping the process is left to the caller,
    /// which receives [`LogOutcome::Terminate`] from dispatch.
    fn fatal(&self, message: &str);

    /// Process exit code to use after a fatal message
    fn exit_code(&self) -> i32 {
        DEFAULT_FATAL_EXIT_CODE
    }
}
