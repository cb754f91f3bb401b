//! Read-only projections of a Status

use std::any::Any;

use super::cause::Cause;
use super::payload::Payload;
use super::types::{HelpMap, HelpType, LogClass, Status};

impl Status {
    /// `true` for successes and warnings
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_error(&self) -> bool {
        !self.success
    }

    pub fn is_warn(&self) -> bool {
        self.warn
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// The message, when this status is a warning
    pub fn warning(&self) -> Option<&str> {
        self.warn.then_some(self.message.as_str())
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    pub fn error_code(&self) -> i32 {
        self.error_code
    }

    pub fn data(&self) -> Option<&dyn Payload> {
        self.data.as_deref()
    }

    /// The payload downcast to its concrete type
    pub fn data_as<T: Any>(&self) -> Option<&T> {
        self.data
            .as_deref()
            .and_then(|payload| payload.as_any().downcast_ref::<T>())
    }

    /// Explicit log class override, if one was set
    pub fn log_class(&self) -> Option<LogClass> {
        self.log_class
    }

    /// Help text for one audience; empty when the slot is unset
    pub fn get_help(&self, help_type: HelpType) -> &str {
        self.help.get(&help_type).map_or("", String::as_str)
    }

    /// Help text for every audience
    pub fn help(&self) -> &str {
        self.get_help(HelpType::All)
    }

    pub fn all_help(&self) -> &str {
        self.get_help(HelpType::All)
    }

    pub fn api_help(&self) -> &str {
        self.get_help(HelpType::Api)
    }

    pub fn cli_help(&self) -> &str {
        self.get_help(HelpType::Cli)
    }

    pub fn help_map(&self) -> &HelpMap {
        &self.help
    }
}
