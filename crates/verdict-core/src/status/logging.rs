//! Log dispatch for Status

use super::types::{LogClass, Status};
use crate::logger::{self, LogOutcome, Logger};

impl Status {
    /// Log class this status is dispatched at.
    ///
    /// First match wins: explicit override, then error, then warning, then
    /// debug for a plain success.
    pub fn resolved_log_class(&self) -> LogClass {
        if let Some(log_class) = self.log_class {
            return log_class;
        }
        if self.is_error() {
            LogClass::Error
        } else if self.is_warn() {
            LogClass::Warn
        } else {
            LogClass::Debug
        }
    }

    /// Send the message to `logger` at the resolved class.
    ///
    /// A fatal class is emitted and reported as [`LogOutcome::Terminate`];
    /// the process is not stopped here.
    pub fn log_to(&self, logger: &dyn Logger) -> LogOutcome {
        let log_class = self.resolved_log_class();
        match log_class {
            LogClass::Fatal => {
                logger.fatal(&self.message);
                return LogOutcome::Terminate {
                    exit_code: logger.exit_code(),
                };
            }
            LogClass::Error => logger.error(&self.message),
            LogClass::Warn => logger.warn(&self.message),
            LogClass::Debug => logger.debug(&self.message),
        }
        LogOutcome::Logged(log_class)
    }

    /// Log to the process-wide logger; a fatal class exits the process
    pub fn log(&self) {
        let logger = logger::global();
        self.log_to(&*logger).exit_if_fatal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::MockLogger;
    use mockall::predicate::eq;

    #[test]
    fn test_resolution_order() {
        assert_eq!(Status::our_bad("x").resolved_log_class(), LogClass::Error);
        assert_eq!(Status::warn("x").resolved_log_class(), LogClass::Warn);
        assert_eq!(Status::simple_success().resolved_log_class(), LogClass::Debug);
        assert_eq!(
            Status::simple_success()
                .with_log_class(LogClass::Error)
                .resolved_log_class(),
            LogClass::Error
        );
    }

    #[test]
    fn test_override_beats_error_flag() {
        let status = Status::our_bad("noisy but harmless").with_log_class(LogClass::Debug);
        let mut logger = MockLogger::new();
        logger
            .expect_debug()
            .with(eq("noisy but harmless"))
            .times(1)
            .return_const(());
        assert_eq!(status.log_to(&logger), LogOutcome::Logged(LogClass::Debug));
    }

    #[test]
    fn test_warning_goes_to_warn_once() {
        let mut logger = MockLogger::new();
        logger
            .expect_warn()
            .with(eq("low disk"))
            .times(1)
            .return_const(());
        logger.expect_error().never();
        logger.expect_debug().never();
        logger.expect_fatal().never();

        let outcome = Status::warn("low disk").log_to(&logger);
        assert_eq!(outcome, LogOutcome::Logged(LogClass::Warn));
    }

    #[test]
    fn test_error_dispatch() {
        let mut logger = MockLogger::new();
        logger
            .expect_error()
            .with(eq("payment declined"))
            .times(1)
            .return_const(());
        let outcome = Status::your_bad("payment declined").log_to(&logger);
        assert!(!outcome.is_terminal());
    }

    #[test]
    fn test_fatal_reports_termination() {
        let mut logger = MockLogger::new();
        logger
            .expect_fatal()
            .with(eq("state corrupted"))
            .times(1)
            .return_const(());
        logger.expect_exit_code().times(1).return_const(3);

        let status = Status::our_bad("state corrupted").with_log_class(LogClass::Fatal);
        let outcome = status.log_to(&logger);
        assert_eq!(outcome, LogOutcome::Terminate { exit_code: 3 });
        assert!(outcome.is_terminal());
    }
}
