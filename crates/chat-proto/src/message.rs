//! Typed outbound messages.
//!
//! Each variant serializes to an object whose `type` field is the
//! canonical wire name, followed by the variant's fields. Builders do
//! not validate identifiers; the command interpreter does that before
//! construction.

use serde::{Deserialize, Serialize};

use crate::types::{MessageType, Status};

/// Message from client to server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientMessage {
    /// Bind a username to this session.
    Identify { username: String },
    /// Change presence status.
    Status { status: Status },
    /// Request the global user list.
    Users,
    /// Private message to one user.
    Text { username: String, text: String },
    /// Broadcast to everyone.
    PublicText { text: String },
    /// Create a room.
    NewRoom { roomname: String },
    /// Invite users into a room.
    Invite {
        roomname: String,
        usernames: Vec<String>,
    },
    /// Join a room previously invited to.
    JoinRoom { roomname: String },
    /// Request a room's user list.
    RoomUsers { roomname: String },
    /// Message to everyone in a room.
    RoomText { roomname: String, text: String },
    /// Leave a room.
    LeaveRoom { roomname: String },
    /// Announce disconnection.
    Disconnect,
}

impl ClientMessage {
    /// The protocol type of this message.
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        match self {
            Self::Identify { .. } => MessageType::Identify,
            Self::Status { .. } => MessageType::Status,
            Self::Users => MessageType::Users,
            Self::Text { .. } => MessageType::Text,
            Self::PublicText { .. } => MessageType::PublicText,
            Self::NewRoom { .. } => MessageType::NewRoom,
            Self::Invite { .. } => MessageType::Invite,
            Self::JoinRoom { .. } => MessageType::JoinRoom,
            Self::RoomUsers { .. } => MessageType::RoomUsers,
            Self::RoomText { .. } => MessageType::RoomText,
            Self::LeaveRoom { .. } => MessageType::LeaveRoom,
            Self::Disconnect => MessageType::Disconnect,
        }
    }

    /// Serialize to one compact wire line, without the trailing newline.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_wire_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_tag_matches_message_type() {
        let messages = [
            ClientMessage::Identify {
                username: "bob".into(),
            },
            ClientMessage::Status {
                status: Status::Away,
            },
            ClientMessage::Users,
            ClientMessage::Text {
                username: "bob".into(),
                text: "hi".into(),
            },
            ClientMessage::PublicText { text: "hi".into() },
            ClientMessage::NewRoom {
                roomname: "Room 1".into(),
            },
            ClientMessage::Invite {
                roomname: "Room 1".into(),
                usernames: vec!["bob".into(), "eve".into()],
            },
            ClientMessage::JoinRoom {
                roomname: "Room 1".into(),
            },
            ClientMessage::RoomUsers {
                roomname: "Room 1".into(),
            },
            ClientMessage::RoomText {
                roomname: "Room 1".into(),
                text: "hi".into(),
            },
            ClientMessage::LeaveRoom {
                roomname: "Room 1".into(),
            },
            ClientMessage::Disconnect,
        ];

        for msg in messages {
            let value = serde_json::to_value(&msg).unwrap();
            assert_eq!(
                value.get("type").and_then(serde_json::Value::as_str),
                Some(msg.message_type().as_str()),
            );
        }
    }

    #[test]
    fn test_identify_wire_shape() {
        let msg = ClientMessage::Identify {
            username: "bob".into(),
        };
        assert_eq!(
            msg.to_wire_line().unwrap(),
            r#"{"type":"IDENTIFY","username":"bob"}"#
        );
    }

    #[test]
    fn test_invite_carries_username_list() {
        let msg = ClientMessage::Invite {
            roomname: "Room 1".into(),
            usernames: vec!["bob".into(), "eve".into()],
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["roomname"], "Room 1");
        assert_eq!(
            value["usernames"],
            serde_json::json!(["bob", "eve"])
        );
    }

    #[test]
    fn test_wire_line_has_no_embedded_newline() {
        let msg = ClientMessage::PublicText {
            text: "line one\nline two".into(),
        };
        let line = msg.to_wire_line().unwrap();
        assert!(!line.contains('\n'));
    }
}
