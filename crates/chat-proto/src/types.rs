//! Message type and status enumerations with their canonical wire strings.

use serde::{Deserialize, Serialize};

/// Every message type in the protocol, plus an `Invalid` sentinel for
/// unrecognized type strings. `Invalid` is never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    Invalid,

    // Client to server
    Identify,
    Status,
    Users,
    Text,
    PublicText,
    NewRoom,
    Invite,
    JoinRoom,
    RoomUsers,
    RoomText,
    LeaveRoom,
    Disconnect,

    // Server to client
    Response,
    NewUser,
    NewStatus,
    UserList,
    TextFrom,
    PublicTextFrom,
    Invitation,
    JoinedRoom,
    RoomUserList,
    RoomTextFrom,
    LeftRoom,
    Disconnected,
}

/// All non-sentinel variants, in wire order.
pub const MESSAGE_TYPES: [MessageType; 24] = [
    MessageType::Identify,
    MessageType::Status,
    MessageType::Users,
    MessageType::Text,
    MessageType::PublicText,
    MessageType::NewRoom,
    MessageType::Invite,
    MessageType::JoinRoom,
    MessageType::RoomUsers,
    MessageType::RoomText,
    MessageType::LeaveRoom,
    MessageType::Disconnect,
    MessageType::Response,
    MessageType::NewUser,
    MessageType::NewStatus,
    MessageType::UserList,
    MessageType::TextFrom,
    MessageType::PublicTextFrom,
    MessageType::Invitation,
    MessageType::JoinedRoom,
    MessageType::RoomUserList,
    MessageType::RoomTextFrom,
    MessageType::LeftRoom,
    MessageType::Disconnected,
];

impl MessageType {
    /// Canonical uppercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::Identify => "IDENTIFY",
            Self::Status => "STATUS",
            Self::Users => "USERS",
            Self::Text => "TEXT",
            Self::PublicText => "PUBLIC_TEXT",
            Self::NewRoom => "NEW_ROOM",
            Self::Invite => "INVITE",
            Self::JoinRoom => "JOIN_ROOM",
            Self::RoomUsers => "ROOM_USERS",
            Self::RoomText => "ROOM_TEXT",
            Self::LeaveRoom => "LEAVE_ROOM",
            Self::Disconnect => "DISCONNECT",
            Self::Response => "RESPONSE",
            Self::NewUser => "NEW_USER",
            Self::NewStatus => "NEW_STATUS",
            Self::UserList => "USER_LIST",
            Self::TextFrom => "TEXT_FROM",
            Self::PublicTextFrom => "PUBLIC_TEXT_FROM",
            Self::Invitation => "INVITATION",
            Self::JoinedRoom => "JOINED_ROOM",
            Self::RoomUserList => "ROOM_USER_LIST",
            Self::RoomTextFrom => "ROOM_TEXT_FROM",
            Self::LeftRoom => "LEFT_ROOM",
            Self::Disconnected => "DISCONNECTED",
        }
    }

    /// Map a wire name to its type. Unrecognized names map to `Invalid`.
    #[must_use]
    pub fn from_wire(name: &str) -> Self {
        MESSAGE_TYPES
            .into_iter()
            .find(|t| t.as_str() == name)
            .unwrap_or(Self::Invalid)
    }

    /// Whether this type originates on the server side.
    #[must_use]
    pub const fn is_server_originated(self) -> bool {
        matches!(
            self,
            Self::Response
                | Self::NewUser
                | Self::NewStatus
                | Self::UserList
                | Self::TextFrom
                | Self::PublicTextFrom
                | Self::Invitation
                | Self::JoinedRoom
                | Self::RoomUserList
                | Self::RoomTextFrom
                | Self::LeftRoom
                | Self::Disconnected
        )
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User presence status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Active,
    Away,
    Busy,
}

impl Status {
    /// Exact uppercase wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Away => "AWAY",
            Self::Busy => "BUSY",
        }
    }

    /// Parse an exact uppercase wire string. Anything else is rejected,
    /// never defaulted.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "ACTIVE" => Some(Self::Active),
            "AWAY" => Some(Self::Away),
            "BUSY" => Some(Self::Busy),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
