//! Predicates over an optional status
//!
//! A missing status (`None`) means nothing went wrong, so it is a success
//! and not an error.

use crate::status::{Status, status_is_success};

/// `true` when a status is present and is a failure
pub fn error(status: Option<&Status>) -> bool {
    status.is_some_and(Status::is_error)
}

/// `true` when no status is present, or it counts as successful
pub fn success(status: Option<&Status>) -> bool {
    status.is_none_or(status_is_success)
}
