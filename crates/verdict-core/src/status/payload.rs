//! Opaque payload attached to a status

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Caller-supplied data carried by a status.
///
/// Anything `Serialize + Debug + Send + Sync` is a payload. The status never
/// inspects it beyond three questions: how it marshals to JSON, whether it
/// is plain text, and what its concrete type is.
pub trait Payload: fmt::Debug + Send + Sync {
    /// Marshal the payload to JSON text
    fn to_json(&self) -> serde_json::Result<String>;

    /// The payload as text, when it is text-shaped
    fn as_text(&self) -> Option<&str>;

    /// Returns this payload as a `&dyn Any` to allow downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T> Payload for T
where
    T: Serialize + fmt::Debug + Send + Sync + 'static,
{
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn as_text(&self) -> Option<&str> {
        let any = self as &dyn Any;
        if let Some(text) = any.downcast_ref::<String>() {
            return Some(text.as_str());
        }
        if let Some(text) = any.downcast_ref::<&'static str>() {
            return Some(*text);
        }
        any.downcast_ref::<serde_json::Value>()
            .and_then(serde_json::Value::as_str)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Shared handle to a payload; cloning a status shares its data
pub type SharedPayload = Arc<dyn Payload>;
