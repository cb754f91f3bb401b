//! Fluent setters for Status
//!
//! Every setter consumes the status and hands it back, so refinements chain:
//! `Status::our_bad("x").with_details("y").with_error_code(7)`.

use std::sync::Arc;

use super::cause::{BoxError, Cause};
use super::payload::Payload;
use super::types::{HelpMap, HelpType, LogClass, Status};

impl Status {
    /// Set the success flag. A failure is never a warning, and gets a cause
    /// from its message when it has none.
    pub fn with_success(mut self, success: bool) -> Self {
        self.success = success;
        if !success {
            self.warn = false;
            self.ensure_failure_cause();
        }
        self
    }

    /// Mark (or unmark) the status as a warning. A warning is always a success.
    pub fn with_warn(mut self, warn: bool) -> Self {
        self.warn = warn;
        if warn {
            self.success = true;
        }
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn with_http_status(mut self, http_status: u16) -> Self {
        self.http_status = http_status;
        self
    }

    pub fn with_error_code(mut self, error_code: i32) -> Self {
        self.error_code = error_code;
        self
    }

    pub fn with_data<T: Payload + 'static>(mut self, data: T) -> Self {
        let data: Arc<dyn Payload> = Arc::new(data);
        self.data = Some(data);
        self
    }

    /// Replace the cause. A [`Status`] passed here stays walkable as a chain.
    pub fn with_cause<E: Into<BoxError>>(mut self, cause: E) -> Self {
        self.cause = Some(Cause::new(cause));
        self
    }

    /// Force the log class used by dispatch, bypassing the flag-based default
    pub fn with_log_class(mut self, log_class: LogClass) -> Self {
        self.log_class = Some(log_class);
        self
    }

    /// Set help text for one audience.
    ///
    /// Writing [`HelpType::All`] cascades to every slot, replacing earlier
    /// per-audience overrides; writing `Api` or `Cli` touches only that slot.
    pub fn with_help(mut self, help_type: HelpType, help: impl Into<String>) -> Self {
        let help = help.into();
        match help_type {
            HelpType::All => {
                for slot in HelpType::VARIANTS {
                    self.help.insert(slot, help.clone());
                }
            }
            HelpType::Api | HelpType::Cli => {
                self.help.insert(help_type, help);
            }
        }
        self
    }

    pub fn with_all_help(self, help: impl Into<String>) -> Self {
        self.with_help(HelpType::All, help)
    }

    pub fn with_api_help(self, help: impl Into<String>) -> Self {
        self.with_help(HelpType::Api, help)
    }

    pub fn with_cli_help(self, help: impl Into<String>) -> Self {
        self.with_help(HelpType::Cli, help)
    }

    /// Merge per-audience overrides slot by slot, without cascading
    pub fn with_help_map(mut self, help: HelpMap) -> Self {
        self.help.extend(help);
        self
    }
}
