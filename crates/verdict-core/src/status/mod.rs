//! Status values
//!
//! This module provides the [`Status`] type and everything built around it:
//! - construction with default resolution ([`Status::new`] and the convenience builders)
//! - read-only accessors and fluent `with_*` setters
//! - cause-chain and help aggregation (`long_message`, `full_text`, `full_help`, ...)
//! - structured serialization to a flat property map
//! - module-level helpers that work on any `&dyn Error`

mod accessors;
mod aggregate;
mod cause;
mod constructors;
mod conversions;
mod functions;
mod logging;
mod mutators;
mod payload;
mod serialize;
mod types;

// Re-export all public types and helpers
pub use cause::{BoxError, Cause};
pub use functions::{cause, help, http_status, is_error, is_success, is_warn, message};
pub(crate) use functions::status_is_success;
pub use payload::{Payload, SharedPayload};
pub use serialize::PropertyMap;
pub use types::{
    CONTACT_SUPPORT_HELP, HelpMap, HelpType, LogClass, MessageError, STATUS_BAD_REQUEST,
    STATUS_INTERNAL_SERVER_ERROR, STATUS_OK, Status, StatusArgs, StatusResult,
};
