//! Type extraction from decoded inbound objects.
//!
//! The transport decodes each wire line into a generic
//! `serde_json::Value`; this module only interprets the `type` tag.
//! A record whose tag is absent, non-string, or unmapped is
//! unrecognized, which is distinct from a structurally malformed line.

use serde_json::Value;

use crate::types::MessageType;

/// Extract the message type of a decoded inbound object.
///
/// Returns `None` when the value is not an object, the `type` field is
/// missing or not a string, or the name is not a known wire name.
#[must_use]
pub fn extract_type(value: &Value) -> Option<MessageType> {
    let name = value.as_object()?.get("type")?.as_str()?;
    match MessageType::from_wire(name) {
        MessageType::Invalid => None,
        ty => Some(ty),
    }
}
