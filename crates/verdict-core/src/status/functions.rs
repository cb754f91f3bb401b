//! Helpers that accept any error and look for a Status inside it
//!
//! `None` stands for "no error at all"; any error that is not a [`Status`]
//! is treated as a plain failure.

use std::error::Error as StdError;

use super::types::{HelpType, Status};

fn as_status<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a Status> {
    error.downcast_ref::<Status>()
}

/// HTTP status of a status-shaped error, `0` for anything else
pub fn http_status(error: &(dyn StdError + 'static)) -> u16 {
    as_status(error).map_or(0, Status::http_status)
}

/// Message of a status-shaped error, empty for anything else
pub fn message<'a>(error: &'a (dyn StdError + 'static)) -> &'a str {
    as_status(error).map_or("", Status::message)
}

/// The underlying cause of a status, or the error itself when it is not one
pub fn cause<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    match as_status(error) {
        Some(status) => status.cause().map(|cause| cause.as_error()),
        None => Some(error),
    }
}

/// Help text of a status-shaped error for one audience (default `All`)
pub fn help<'a>(error: &'a (dyn StdError + 'static), help_type: Option<HelpType>) -> &'a str {
    as_status(error).map_or("", |status| {
        status.get_help(help_type.unwrap_or(HelpType::All))
    })
}

pub fn is_error(error: Option<&(dyn StdError + 'static)>) -> bool {
    match error {
        None => false,
        Some(error) => as_status(error).is_none_or(Status::is_error),
    }
}

/// A status counts as successful when it is not an error, or when its HTTP
/// status is still the unset sentinel `0`.
pub fn is_success(error: Option<&(dyn StdError + 'static)>) -> bool {
    match error {
        None => true,
        Some(error) => as_status(error).is_some_and(status_is_success),
    }
}

/// `true` only for a status-shaped error flagged as a warning.
///
/// `None` is not a warning: "no error at all" reports `false` here.
pub fn is_warn(error: Option<&(dyn StdError + 'static)>) -> bool {
    error.and_then(as_status).is_some_and(Status::is_warn)
}

pub(crate) fn status_is_success(status: &Status) -> bool {
    !status.is_error() || status.http_status() == 0
}
