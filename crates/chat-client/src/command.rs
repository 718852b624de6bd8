//! Command interpreter: typed input lines to protocol messages.

use chat_proto::{ClientMessage, Status, room_name_is_valid, username_is_valid};
use thiserror::Error;

use crate::tokenizer::{TokenizeError, tokenize};

/// A successfully interpreted input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send a message to the server.
    Send(ClientMessage),
    /// End the session. Carries no outbound payload.
    Quit,
}

/// Interpretation error, with a short user-facing message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("{0}")]
    Syntax(String),
    #[error("unknown command")]
    UnknownCommand,
    #[error("{0}")]
    MissingArgument(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("out of memory")]
    OutOfMemory,
}

impl From<TokenizeError> for CommandError {
    fn from(err: TokenizeError) -> Self {
        match err {
            TokenizeError::OutOfMemory => Self::OutOfMemory,
            other => Self::Syntax(other.to_string()),
        }
    }
}

/// Interpret one input line (without its trailing newline).
///
/// A line that does not start with `/` after trimming is one free-text
/// broadcast; it is not tokenized. Otherwise the marker is stripped,
/// the remainder tokenized, and the first token dispatched as a
/// case-sensitive lowercase keyword.
///
/// # Errors
/// One `CommandError` per failure mode; see the variant messages.
pub fn interpret(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return Err(CommandError::Empty);
    }

    let Some(command_line) = trimmed.strip_prefix('/') else {
        return Ok(Command::Send(ClientMessage::PublicText {
            text: trimmed.to_string(),
        }));
    };

    let tokens = tokenize(command_line)?;
    if tokens.is_empty() || tokens[0].is_empty() {
        return Err(CommandError::Empty);
    }

    match tokens[0].as_str() {
        "quit" => Ok(Command::Quit),
        "identify" => build_identify(&tokens).map(Command::Send),
        "status" => build_status(&tokens).map(Command::Send),
        "users" => Ok(Command::Send(ClientMessage::Users)),
        "msg" => build_msg(&tokens).map(Command::Send),
        "all" => build_all(&tokens).map(Command::Send),
        "newroom" => {
            let roomname = room_argument(&tokens, "usage: /newroom <roomname>")?;
            Ok(Command::Send(ClientMessage::NewRoom { roomname }))
        }
        "invite" => build_invite(&tokens).map(Command::Send),
        "join" => {
            let roomname = room_argument(&tokens, "usage: /join <roomname>")?;
            Ok(Command::Send(ClientMessage::JoinRoom { roomname }))
        }
        "roomusers" => {
            let roomname = room_argument(&tokens, "usage: /roomusers <roomname>")?;
            Ok(Command::Send(ClientMessage::RoomUsers { roomname }))
        }
        "roommsg" => build_roommsg(&tokens).map(Command::Send),
        "leave" => {
            let roomname = room_argument(&tokens, "usage: /leave <roomname>")?;
            Ok(Command::Send(ClientMessage::LeaveRoom { roomname }))
        }
        "disconnect" => Ok(Command::Send(ClientMessage::Disconnect)),
        _ => Err(CommandError::UnknownCommand),
    }
}

fn build_identify(tokens: &[String]) -> Result<ClientMessage, CommandError> {
    let Some(username) = tokens.get(1) else {
        return Err(CommandError::MissingArgument("missing username".into()));
    };
    if !username_is_valid(username) {
        return Err(CommandError::InvalidArgument("invalid username".into()));
    }
    Ok(ClientMessage::Identify {
        username: username.clone(),
    })
}

fn build_status(tokens: &[String]) -> Result<ClientMessage, CommandError> {
    let Some(status) = tokens.get(1) else {
        return Err(CommandError::MissingArgument("missing status".into()));
    };
    let Some(status) = Status::from_wire(status) else {
        return Err(CommandError::InvalidArgument(
            "invalid status (expected ACTIVE/AWAY/BUSY)".into(),
        ));
    };
    Ok(ClientMessage::Status { status })
}

fn build_msg(tokens: &[String]) -> Result<ClientMessage, CommandError> {
    if tokens.len() < 3 {
        return Err(CommandError::MissingArgument(
            "usage: /msg <username> <text>".into(),
        ));
    }
    let username = &tokens[1];
    if !username_is_valid(username) {
        return Err(CommandError::InvalidArgument("invalid username".into()));
    }
    let text = joined_text(&tokens[2..])?;
    Ok(ClientMessage::Text {
        username: username.clone(),
        text,
    })
}

fn build_all(tokens: &[String]) -> Result<ClientMessage, CommandError> {
    if tokens.len() < 2 {
        return Err(CommandError::MissingArgument("usage: /all <text>".into()));
    }
    let text = joined_text(&tokens[1..])?;
    Ok(ClientMessage::PublicText { text })
}

fn build_roommsg(tokens: &[String]) -> Result<ClientMessage, CommandError> {
    if tokens.len() < 3 {
        return Err(CommandError::MissingArgument(
            "usage: /roommsg <roomname> <text>".into(),
        ));
    }
    let roomname = &tokens[1];
    if !room_name_is_valid(roomname) {
        return Err(CommandError::InvalidArgument("invalid room name".into()));
    }
    let text = joined_text(&tokens[2..])?;
    Ok(ClientMessage::RoomText {
        roomname: roomname.clone(),
        text,
    })
}

fn build_invite(tokens: &[String]) -> Result<ClientMessage, CommandError> {
    if tokens.len() < 3 {
        return Err(CommandError::MissingArgument(
            "usage: /invite <roomname> <user1> [user2 ...]".into(),
        ));
    }
    let roomname = &tokens[1];
    if !room_name_is_valid(roomname) {
        return Err(CommandError::InvalidArgument("invalid room name".into()));
    }
    let usernames = &tokens[2..];
    if usernames.iter().any(|name| !username_is_valid(name)) {
        return Err(CommandError::InvalidArgument(
            "invalid username in invite list".into(),
        ));
    }
    Ok(ClientMessage::Invite {
        roomname: roomname.clone(),
        usernames: usernames.to_vec(),
    })
}

fn room_argument(tokens: &[String], usage: &str) -> Result<String, CommandError> {
    let Some(roomname) = tokens.get(1) else {
        return Err(CommandError::MissingArgument(usage.into()));
    };
    if !room_name_is_valid(roomname) {
        return Err(CommandError::InvalidArgument("invalid room name".into()));
    }
    Ok(roomname.clone())
}

// Free text is whatever tokens remain after the fixed arguments,
// rejoined with single spaces.
fn joined_text(tokens: &[String]) -> Result<String, CommandError> {
    let text = tokens.join(" ");
    if text.is_empty() {
        return Err(CommandError::InvalidArgument("text must not be empty".into()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send(line: &str) -> ClientMessage {
        match interpret(line).unwrap() {
            Command::Send(msg) => msg,
            Command::Quit => panic!("expected a send action"),
        }
    }

    #[test]
    fn test_bare_text_is_public_broadcast() {
        assert_eq!(
            send("hello there"),
            ClientMessage::PublicText {
                text: "hello there".into()
            }
        );
        // Not tokenized: quotes and backslashes stay as typed.
        assert_eq!(
            send(r#"  she said "hi" \o/"#),
            ClientMessage::PublicText {
                text: r#"she said "hi" \o/"#.into()
            }
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(interpret(""), Err(CommandError::Empty));
        assert_eq!(interpret("   "), Err(CommandError::Empty));
        assert_eq!(interpret("/"), Err(CommandError::Empty));
    }

    #[test]
    fn test_identify() {
        assert_eq!(
            send("/identify bob"),
            ClientMessage::Identify {
                username: "bob".into()
            }
        );
        assert!(matches!(
            interpret("/identify"),
            Err(CommandError::MissingArgument(_))
        ));
        assert!(matches!(
            interpret("/identify toolongname"),
            Err(CommandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_status() {
        assert_eq!(
            send("/status AWAY"),
            ClientMessage::Status {
                status: Status::Away
            }
        );
        assert!(matches!(
            interpret("/status away"),
            Err(CommandError::InvalidArgument(_))
        ));
        assert!(matches!(
            interpret("/status"),
            Err(CommandError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_msg_joins_trailing_tokens() {
        assert_eq!(
            send("/msg bob hello there"),
            ClientMessage::Text {
                username: "bob".into(),
                text: "hello there".into()
            }
        );
    }

    #[test]
    fn test_msg_missing_text() {
        assert!(matches!(
            interpret("/msg bob"),
            Err(CommandError::MissingArgument(_))
        ));
        assert!(matches!(
            interpret(r#"/msg bob """#),
            Err(CommandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_all() {
        assert_eq!(
            send("/all good morning"),
            ClientMessage::PublicText {
                text: "good morning".into()
            }
        );
        assert!(matches!(
            interpret("/all"),
            Err(CommandError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_room_commands_accept_quoted_names() {
        assert_eq!(
            send(r#"/join "Room 1""#),
            ClientMessage::JoinRoom {
                roomname: "Room 1".into()
            }
        );
        assert_eq!(
            send(r#"/roommsg "Room 1" see you there"#),
            ClientMessage::RoomText {
                roomname: "Room 1".into(),
                text: "see you there".into()
            }
        );
        assert!(matches!(
            interpret("/newroom this-room-name-is-too-long"),
            Err(CommandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invite() {
        assert_eq!(
            send(r#"/invite "Room 1" bob eve"#),
            ClientMessage::Invite {
                roomname: "Room 1".into(),
                usernames: vec!["bob".into(), "eve".into()]
            }
        );
        assert!(matches!(
            interpret("/invite room"),
            Err(CommandError::MissingArgument(_))
        ));
        assert!(matches!(
            interpret("/invite room bob far-too-long-name"),
            Err(CommandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_zero_argument_commands() {
        assert_eq!(send("/users"), ClientMessage::Users);
        assert_eq!(send("/disconnect"), ClientMessage::Disconnect);
        assert_eq!(interpret("/quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(interpret("/bogus"), Err(CommandError::UnknownCommand));
        // Keywords are case-sensitive.
        assert_eq!(interpret("/QUIT"), Err(CommandError::UnknownCommand));
    }

    #[test]
    fn test_tokenizer_errors_propagate_as_syntax() {
        assert_eq!(
            interpret(r#"/join "Room"#),
            Err(CommandError::Syntax("unterminated quote".into()))
        );
        assert_eq!(
            interpret("/msg bob a\\"),
            Err(CommandError::Syntax("invalid escape sequence".into()))
        );
    }
}
