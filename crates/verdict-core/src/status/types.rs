//! Core status types

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cause::Cause;
use super::payload::SharedPayload;

/// Result type alias for operations that fail with a [`Status`]
pub type StatusResult<T> = Result<T, Status>;

/// Help text used when no audience help was supplied
pub const CONTACT_SUPPORT_HELP: &str = "contact support";

/// HTTP 200
pub const STATUS_OK: u16 = 200;
/// HTTP 400
pub const STATUS_BAD_REQUEST: u16 = 400;
/// HTTP 500, also the default for a status built without one
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Audience a help text is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpType {
    /// Shown to every audience; writing it cascades to the other slots
    All,
    /// API consumers
    Api,
    /// Command-line users
    Cli,
}

impl HelpType {
    /// Every help slot, in iteration order
    pub const VARIANTS: [HelpType; 3] = [HelpType::All, HelpType::Api, HelpType::Cli];

    /// Lowercase key used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Api => "api",
            Self::Cli => "cli",
        }
    }
}

impl fmt::Display for HelpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity bucket a status is routed to when logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogClass {
    /// Emit, then terminate the process
    Fatal,
    Error,
    Warn,
    Debug,
}

impl LogClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for LogClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-audience help text, ordered by [`HelpType`]
pub type HelpMap = BTreeMap<HelpType, String>;

/// Plain error carrying only a message.
///
/// Used for causes synthesized from a failure's message and for the
/// flattened `long_error` / `full_text_error` views of a chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct MessageError(pub String);

impl MessageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Input to [`Status::new`].
///
/// Every field is optional in practice: empty strings, zero and `None` are
/// resolved to defaults by the constructor.
#[derive(Debug, Clone, Default)]
pub struct StatusArgs {
    /// `true` for success (or warning), `false` for failure
    pub success: bool,
    /// Marks the status as a warning, which implies success
    pub warning: bool,
    pub message: String,
    /// HTTP-style status code; `0` resolves to 500
    pub http_status: u16,
    pub cause: Option<Cause>,
    pub data: Option<SharedPayload>,
    /// Help for every audience; empty resolves to [`CONTACT_SUPPORT_HELP`]
    pub help: String,
    /// Help for API consumers; empty falls back to `help`
    pub api_help: String,
    /// Help for command-line users; empty falls back to `help`
    pub cli_help: String,
}

/// Unified success/warning/failure value.
///
/// A `Status` is built once (through [`Status::new`] or a convenience
/// builder), optionally refined with the consuming `with_*` setters, and then
/// read by any number of consumers. It has a single owner while it is being
/// refined; once built, shared read-only access is safe because no accessor
/// mutates state.
///
/// Statuses compose by nesting: one status can be the [`Cause`] of another.
#[derive(Debug, Clone)]
pub struct Status {
    pub(crate) success: bool,
    pub(crate) warn: bool,
    pub(crate) http_status: u16,
    pub(crate) message: String,
    pub(crate) details: String,
    pub(crate) data: Option<SharedPayload>,
    pub(crate) help: HelpMap,
    pub(crate) error_code: i32,
    pub(crate) cause: Option<Cause>,
    pub(crate) log_class: Option<LogClass>,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Status {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(Cause::as_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_type_keys() {
        let keys: Vec<&str> = HelpType::VARIANTS.iter().map(HelpType::as_str).collect();
        assert_eq!(keys, vec!["all", "api", "cli"]);
        assert_eq!(HelpType::Cli.to_string(), "cli");
    }

    #[test]
    fn test_log_class_serde_names() {
        let json = serde_json::to_string(&LogClass::Fatal).unwrap();
        assert_eq!(json, "\"fatal\"");
        let parsed: LogClass = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(parsed, LogClass::Warn);
    }

    #[test]
    fn test_message_error_display() {
        let err = MessageError::new("disk full");
        assert_eq!(err.to_string(), "disk full");
    }
}
