//! Protocol model for the line-delimited JSON chat protocol.
//!
//! This crate provides the wire-level building blocks:
//! - `MessageType` - closed enumeration of every protocol message type
//! - `Status` - user presence status with exact uppercase wire strings
//! - `ClientMessage` - typed outbound messages, serde-tagged by type name
//! - Identifier validation for usernames and room names
//! - Type extraction from decoded inbound objects

pub mod inbound;
pub mod message;
pub mod types;
pub mod validate;

pub use inbound::extract_type;
pub use message::ClientMessage;
pub use types::{MessageType, Status};
pub use validate::{room_name_is_valid, username_is_valid};
