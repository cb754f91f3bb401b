//! From trait implementations for Status conversions

use super::cause::BoxError;
use super::types::{Status, StatusArgs};

impl From<StatusArgs> for Status {
    fn from(args: StatusArgs) -> Self {
        Self::new(args)
    }
}

impl From<anyhow::Error> for Status {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<Status>() {
            Ok(status) => status,
            Err(other) => Self::wrap(BoxError::from(other), None),
        }
    }
}

impl From<std::io::Error> for Status {
    fn from(error: std::io::Error) -> Self {
        Self::wrap(error, None)
    }
}

impl From<serde_json::Error> for Status {
    fn from(error: serde_json::Error) -> Self {
        Self::wrap(error, None)
    }
}
