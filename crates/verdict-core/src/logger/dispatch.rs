//! Dispatch of arbitrary errors to a logger

use std::error::Error as StdError;

use super::{Logger, global};
use crate::status::{LogClass, Status};

/// Result of dispatching one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a fatal outcome must reach exit_if_fatal or be handled"]
pub enum LogOutcome {
    /// Emitted at this class; execution continues
    Logged(LogClass),
    /// Emitted as fatal; the process should now exit with `exit_code`
    Terminate { exit_code: i32 },
}

impl LogOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminate { .. })
    }

    /// Exit the process for [`LogOutcome::Terminate`], otherwise do nothing.
    ///
    /// Nothing after this call runs for a fatal outcome; finish cleanup first.
    pub fn exit_if_fatal(self) {
        if let Self::Terminate { exit_code } = self {
            std::process::exit(exit_code);
        }
    }
}

/// Dispatch any error to `logger`.
///
/// A [`Status`] follows its own resolution order; anything else is logged
/// verbatim at error class.
pub fn log_to(logger: &dyn Logger, error: &(dyn StdError + 'static)) -> LogOutcome {
    match error.downcast_ref::<Status>() {
        Some(status) => status.log_to(logger),
        None => {
            logger.error(&error.to_string());
            LogOutcome::Logged(LogClass::Error)
        }
    }
}

/// Dispatch any error to the process-wide logger, exiting on fatal
pub fn log(error: &(dyn StdError + 'static)) {
    let logger = global();
    log_to(&*logger, error).exit_if_fatal();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::MockLogger;
    use mockall::predicate::eq;
    use std::io;

    #[test]
    fn test_plain_error_logged_verbatim() {
        let mut logger = MockLogger::new();
        logger
            .expect_error()
            .with(eq("connection reset"))
            .times(1)
            .return_const(());
        let err = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset");
        assert_eq!(log_to(&logger, &err), LogOutcome::Logged(LogClass::Error));
    }

    #[test]
    fn test_status_uses_resolution() {
        let mut logger = MockLogger::new();
        logger
            .expect_debug()
            .with(eq("synced"))
            .times(1)
            .return_const(());
        let status = Status::success("synced");
        assert_eq!(log_to(&logger, &status), LogOutcome::Logged(LogClass::Debug));
    }

    #[test]
    fn test_non_fatal_outcome_does_not_exit() {
        LogOutcome::Logged(LogClass::Warn).exit_if_fatal();
        assert!(!LogOutcome::Logged(LogClass::Error).is_terminal());
    }
}
