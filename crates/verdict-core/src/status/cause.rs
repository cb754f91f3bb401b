//! Underlying cause of a status

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use super::types::Status;

/// Boxed, thread-safe error accepted wherever a cause is supplied
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The `cause` link of a status chain.
///
/// A cause is either another [`Status`], whose own chain can be walked
/// further, or a plain error that terminates the chain.
#[derive(Debug, Clone)]
pub enum Cause {
    Status(Box<Status>),
    Error(Arc<dyn StdError + Send + Sync + 'static>),
}

impl Cause {
    /// Build a cause from any error-like value.
    ///
    /// Errors that are really a [`Status`] keep their chain: they become
    /// [`Cause::Status`] rather than an opaque [`Cause::Error`].
    pub fn new<E: Into<BoxError>>(error: E) -> Self {
        let boxed: BoxError = error.into();
        match boxed.downcast::<Status>() {
            Ok(status) => Self::Status(status),
            Err(other) => Self::Error(Arc::from(other)),
        }
    }

    /// The nested status, when this cause has a chain of its own
    pub fn as_status(&self) -> Option<&Status> {
        match self {
            Self::Status(status) => Some(&**status),
            Self::Error(_) => None,
        }
    }

    /// View the cause as a plain error
    pub fn as_error(&self) -> &(dyn StdError + 'static) {
        match self {
            Self::Status(status) => &**status,
            Self::Error(error) => &**error,
        }
    }

    /// Downcast a plain-error cause to its concrete type
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.as_error().downcast_ref::<T>()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status) => fmt::Display::fmt(status, f),
            Self::Error(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl From<Status> for Cause {
    fn from(status: Status) -> Self {
        Self::Status(Box::new(status))
    }
}
