//! Structured serialization of a Status

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use super::cause::Cause;
use super::types::Status;

/// Flat string-to-string view of a status, keyed in sorted order
pub type PropertyMap = BTreeMap<String, String>;

impl Status {
    /// `"warning"`, `"success"` or `"failure"`
    pub fn status_label(&self) -> &'static str {
        if self.warn {
            "warning"
        } else if self.success {
            "success"
        } else {
            "failure"
        }
    }

    /// Flatten the status into string properties.
    ///
    /// A nested status cause is embedded as its own JSON-encoded map. The
    /// payload is JSON-encoded (`null` when absent); a payload that cannot be
    /// marshaled is replaced by an `{"error", "cause"}` object.
    pub fn property_map(&self) -> PropertyMap {
        let cause = match &self.cause {
            Some(Cause::Status(inner)) => map_to_json(&inner.property_map()),
            Some(Cause::Error(error)) => error.to_string(),
            None => String::new(),
        };
        let data = match self.data.as_deref() {
            Some(payload) => payload
                .to_json()
                .unwrap_or_else(|err| marshal_fallback(&err, "data")),
            None => "null".to_string(),
        };

        let mut map = PropertyMap::from([
            ("status".to_string(), self.status_label().to_string()),
            ("cause".to_string(), cause),
            ("message".to_string(), self.message.clone()),
            ("details".to_string(), self.details.clone()),
            ("help".to_string(), self.full_help()),
            ("data".to_string(), data),
            ("httpstatus".to_string(), self.http_status.to_string()),
            ("errorcode".to_string(), self.error_code.to_string()),
        ]);
        for (help_type, help) in &self.help {
            map.insert(format!("{help_type}_help"), help.clone());
        }
        map
    }

    /// The property map as JSON bytes
    pub fn to_json(&self) -> Vec<u8> {
        map_to_json(&self.property_map()).into_bytes()
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.property_map().serialize(serializer)
    }
}

fn map_to_json(map: &PropertyMap) -> String {
    serde_json::to_string(map).unwrap_or_else(|err| marshal_fallback(&err, "property string map"))
}

/// JSON object describing a marshal failure of `what`
pub(crate) fn marshal_fallback(error: &dyn fmt::Display, what: &str) -> String {
    serde_json::json!({
        "error": format!("cannot unmarshal {what}"),
        "cause": error.to_string(),
    })
    .to_string()
}
