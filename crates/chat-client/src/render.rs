//! Human-readable rendering of decoded server messages.
//!
//! Every server-originated type has a fixed field template. Field
//! access is defensive throughout: a field that is absent or has the
//! wrong type renders as a `<missing>` placeholder instead of failing.
//! Only a missing or unrecognized `type` tag is an error.

use chat_proto::{MessageType, extract_type};
use serde_json::Value;
use thiserror::Error;

/// Rendering error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid message (missing/unknown type)")]
    Unrecognized,
}

/// Render one decoded inbound object as multi-line text.
///
/// # Errors
/// Returns `Unrecognized` when the object carries no known type tag.
pub fn render(value: &Value) -> Result<String, RenderError> {
    let ty = extract_type(value).ok_or(RenderError::Unrecognized)?;

    let mut out = format!("[{ty}]\n");
    match ty {
        MessageType::NewUser | MessageType::Disconnected => {
            push_field(&mut out, "username", string_field(value, "username"));
        }
        MessageType::NewStatus => {
            push_field(&mut out, "username", string_field(value, "username"));
            push_field(&mut out, "status", string_field(value, "status"));
        }
        MessageType::TextFrom | MessageType::PublicTextFrom => {
            push_field(&mut out, "from", string_field(value, "username"));
            push_field(&mut out, "text", string_field(value, "text"));
        }
        MessageType::Invitation => {
            push_field(&mut out, "from", string_field(value, "username"));
            push_field(&mut out, "roomname", string_field(value, "roomname"));
        }
        MessageType::JoinedRoom | MessageType::LeftRoom => {
            push_field(&mut out, "roomname", string_field(value, "roomname"));
            push_field(&mut out, "username", string_field(value, "username"));
        }
        MessageType::UserList => {
            push_user_map(&mut out, value.get("users"));
        }
        MessageType::RoomUserList => {
            push_field(&mut out, "roomname", string_field(value, "roomname"));
            push_user_map(&mut out, value.get("users"));
        }
        MessageType::RoomTextFrom => {
            push_field(&mut out, "roomname", string_field(value, "roomname"));
            push_field(&mut out, "from", string_field(value, "username"));
            push_field(&mut out, "text", string_field(value, "text"));
        }
        MessageType::Response => {
            push_field(&mut out, "operation", string_field(value, "operation"));
            push_field(&mut out, "result", string_field(value, "result"));
            push_field(&mut out, "extra", string_field(value, "extra"));
        }
        // A client-originated type echoed back; recognized but has no
        // template of its own.
        _ => out.push_str("server: message type recognized but not explicitly printed\n"),
    }

    Ok(out)
}

fn string_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn push_field(out: &mut String, label: &str, value: Option<&str>) {
    out.push_str(label);
    out.push_str(": ");
    out.push_str(value.unwrap_or("<missing>"));
    out.push('\n');
}

// User lists arrive as a username -> status object; entries keep their
// insertion order.
fn push_user_map(out: &mut String, users: Option<&Value>) {
    let Some(users) = users.and_then(Value::as_object) else {
        out.push_str("users: <missing>\n");
        return;
    };

    out.push_str("users:\n");
    for (username, status) in users {
        out.push_str("  - ");
        out.push_str(username);
        out.push_str(": ");
        out.push_str(status.as_str().unwrap_or("<invalid>"));
        out.push('\n');
    }
}
