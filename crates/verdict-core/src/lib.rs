//! Verdict Core Library
//!
//! This crate provides the unified [`Status`] value: one type that carries a
//! success/warning/failure classification, an HTTP-style status code, a human
//! message, per-audience help text, an opaque payload, an application error
//! code and a causal chain to an underlying error.
//!
//! Downstream layers inspect the same value for routing (HTTP status),
//! presentation (message and help), diagnostics (cause chain) and operational
//! logging (log class dispatched to a [`Logger`]).

pub mod config;
pub mod is;
pub mod logger;
pub mod status;

// Re-export commonly used types
pub use config::{ConfigError, LoggerConfig, LoggerKind};
pub use logger::{
    ConsoleLogger, LogOutcome, Logger, SharedLogger, TracingLogger, WriterLogger,
};
pub use status::{
    BoxError, CONTACT_SUPPORT_HELP, Cause, HelpMap, HelpType, LogClass, MessageError, Payload,
    PropertyMap, SharedPayload, Status, StatusArgs, StatusResult,
};
