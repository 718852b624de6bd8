//! Identifier validation.
//!
//! These checks run once, before an outbound message is constructed.
//! Built messages are trusted afterwards.

/// Maximum username length in bytes.
pub const USERNAME_MAX_LEN: usize = 8;

/// Maximum room name length in bytes.
pub const ROOM_NAME_MAX_LEN: usize = 16;

const fn is_printable_ascii(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E)
}

const fn is_printable_ascii_no_space(byte: u8) -> bool {
    matches!(byte, 0x21..=0x7E)
}

/// A username is 1 to 8 printable non-space ASCII characters.
#[must_use]
pub fn username_is_valid(username: &str) -> bool {
    let bytes = username.as_bytes();
    if bytes.is_empty() || bytes.len() > USERNAME_MAX_LEN {
        return false;
    }
    bytes.iter().all(|&b| is_printable_ascii_no_space(b))
}

/// A room name is 1 to 16 printable ASCII characters; spaces are allowed.
#[must_use]
pub fn room_name_is_valid(room_name: &str) -> bool {
    let bytes = room_name.as_bytes();
    if bytes.is_empty() || bytes.len() > ROOM_NAME_MAX_LEN {
        return false;
    }
    bytes.iter().all(|&b| is_printable_ascii(b))
}
