//! Session loop: multiplexes the server connection and user input.

use std::io::Write as _;

use chat_proto::ClientMessage;
use serde_json::Value;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::command::{Command, interpret};
use crate::framer::{FramerError, LineFramer};
use crate::render::render;

const READ_CHUNK: usize = 4096;

/// Fatal session error. Local input mistakes never surface here; they
/// are reported and the loop keeps running.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("server I/O error: {0}")]
    Transport(std::io::Error),
    #[error("input I/O error: {0}")]
    Input(std::io::Error),
    #[error("out of memory while buffering input")]
    OutOfMemory,
}

impl From<FramerError> for SessionError {
    fn from(err: FramerError) -> Self {
        match err {
            FramerError::OutOfMemory => Self::OutOfMemory,
        }
    }
}

/// Session lifecycle state.
///
/// `Terminating` is absorbing: once reached, no further input is
/// drained and the loop exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(String),
    Terminating,
}

impl SessionState {
    /// Whether a command may proceed in this state. Before
    /// identification only `identify` and `quit` are allowed.
    #[must_use]
    pub fn permits(&self, command: &Command) -> bool {
        match self {
            Self::Unauthenticated => matches!(
                command,
                Command::Quit | Command::Send(ClientMessage::Identify { .. })
            ),
            Self::Authenticated(_) => true,
            Self::Terminating => false,
        }
    }
}

/// One chat session over a server byte stream and an interactive input
/// stream. Owns both line framers; there is no shared state outside
/// this value.
pub struct Session<S, I> {
    server: S,
    input: I,
    state: SessionState,
    server_framer: LineFramer,
    input_framer: LineFramer,
}

impl<S, I> Session<S, I>
where
    S: AsyncRead + AsyncWrite + Unpin,
    I: AsyncRead + Unpin,
{
    /// Create a session over an established connection.
    pub fn new(server: S, input: I) -> Self {
        Self {
            server,
            input,
            state: SessionState::Unauthenticated,
            server_framer: LineFramer::new(),
            input_framer: LineFramer::new(),
        }
    }

    /// Drive the session until it terminates.
    ///
    /// Waits on whichever source has data, drains that source, and
    /// processes every complete line it buffered before waiting again.
    /// End of interactive input is a normal quit; remote closure ends
    /// the session without error.
    ///
    /// # Errors
    /// Returns an error on read/write failure or buffer exhaustion on
    /// either path.
    pub async fn run(mut self) -> Result<(), SessionError> {
        let mut server_chunk = [0u8; READ_CHUNK];
        let mut input_chunk = [0u8; READ_CHUNK];

        while self.state != SessionState::Terminating {
            self.show_prompt();

            tokio::select! {
                read = self.server.read(&mut server_chunk) => match read {
                    Ok(0) => {
                        tracing::info!("server closed the connection");
                        eprintln!("server: connection closed");
                        self.state = SessionState::Terminating;
                    }
                    Ok(n) => self.drain_server(&server_chunk[..n])?,
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                    Err(e) => return Err(SessionError::Transport(e)),
                },
                read = self.input.read(&mut input_chunk) => match read {
                    Ok(0) => {
                        tracing::debug!("end of interactive input");
                        self.state = SessionState::Terminating;
                    }
                    Ok(n) => self.drain_input(&input_chunk[..n]).await?,
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                    Err(e) => return Err(SessionError::Input(e)),
                },
            }
        }

        Ok(())
    }

    fn drain_server(&mut self, bytes: &[u8]) -> Result<(), SessionError> {
        self.server_framer.append(bytes)?;
        while let Some(line) = self.server_framer.pop_line() {
            self.handle_server_line(&line);
        }
        Ok(())
    }

    fn handle_server_line(&mut self, line: &[u8]) {
        let text = String::from_utf8_lossy(line);
        let value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("malformed server message, skipping: {e}");
                return;
            }
        };

        if let Some(identity) = identify_success(&value) {
            tracing::info!(username = %identity, "identified with server");
            self.state = SessionState::Authenticated(identity);
        }

        match render(&value) {
            Ok(rendered) => {
                print!("{rendered}");
                let _ = std::io::stdout().flush();
            }
            Err(e) => tracing::warn!("unrecognized server message, skipping: {e}"),
        }
    }

    async fn drain_input(&mut self, bytes: &[u8]) -> Result<(), SessionError> {
        self.input_framer.append(bytes)?;
        while self.state != SessionState::Terminating {
            let Some(line) = self.input_framer.pop_line() else {
                break;
            };
            let text = String::from_utf8_lossy(&line);
            self.handle_input_line(&text).await?;
        }
        Ok(())
    }

    async fn handle_input_line(&mut self, line: &str) -> Result<(), SessionError> {
        let command = match interpret(line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("input: {err}");
                return Ok(());
            }
        };

        if !self.state.permits(&command) {
            eprintln!("You must identify first using /identify <username>.");
            return Ok(());
        }

        match command {
            Command::Quit => self.state = SessionState::Terminating,
            Command::Send(message) => self.send(&message).await?,
        }
        Ok(())
    }

    async fn send(&mut self, message: &ClientMessage) -> Result<(), SessionError> {
        let line = match message.to_wire_line() {
            Ok(line) => line,
            Err(e) => {
                // Local construction failure; report and keep running.
                eprintln!("error: failed to serialize message: {e}");
                return Ok(());
            }
        };

        self.server
            .write_all(line.as_bytes())
            .await
            .map_err(SessionError::Transport)?;
        self.server
            .write_all(b"\n")
            .await
            .map_err(SessionError::Transport)?;
        self.server.flush().await.map_err(SessionError::Transport)?;
        Ok(())
    }

    fn show_prompt(&self) {
        match &self.state {
            SessionState::Authenticated(identity) => print!("@{identity}: "),
            _ => print!("> "),
        }
        let _ = std::io::stdout().flush();
    }
}

// A RESPONSE acknowledging IDENTIFY carries the accepted username in
// its `extra` field.
fn identify_success(value: &Value) -> Option<String> {
    let object = value.as_object()?;
    if object.get("type")?.as_str()? != "RESPONSE"
        || object.get("operation")?.as_str()? != "IDENTIFY"
        || object.get("result")?.as_str()? != "SUCCESS"
    {
        return None;
    }
    Some(object.get("extra")?.as_str()?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identify() -> Command {
        Command::Send(ClientMessage::Identify {
            username: "bob".into(),
        })
    }

    fn public_text() -> Command {
        Command::Send(ClientMessage::PublicText { text: "hi".into() })
    }

    #[test]
    fn test_unauthenticated_permits_only_identify_and_quit() {
        let state = SessionState::Unauthenticated;
        assert!(state.permits(&identify()));
        assert!(state.permits(&Command::Quit));
        assert!(!state.permits(&public_text()));
        assert!(!state.permits(&Command::Send(ClientMessage::Users)));
        assert!(!state.permits(&Command::Send(ClientMessage::Disconnect)));
    }

    #[test]
    fn test_authenticated_permits_everything() {
        let state = SessionState::Authenticated("bob".into());
        assert!(state.permits(&identify()));
        assert!(state.permits(&public_text()));
        assert!(state.permits(&Command::Quit));
    }

    #[test]
    fn test_terminating_is_absorbing() {
        let state = SessionState::Terminating;
        assert!(!state.permits(&identify()));
        assert!(!state.permits(&Command::Quit));
    }

    #[test]
    fn test_identify_success_extraction() {
        let ack = json!({
            "type": "RESPONSE",
            "operation": "IDENTIFY",
            "result": "SUCCESS",
            "extra": "bob"
        });
        assert_eq!(identify_success(&ack), Some("bob".to_string()));
    }

    #[test]
    fn test_identify_success_rejects_near_misses() {
        assert_eq!(
            identify_success(&json!({
                "type": "RESPONSE",
                "operation": "IDENTIFY",
                "result": "USER_ALREADY_EXISTS",
                "extra": "bob"
            })),
            None
        );
        assert_eq!(
            identify_success(&json!({
                "type": "RESPONSE",
                "operation": "JOIN_ROOM",
                "result": "SUCCESS",
                "extra": "Room 1"
            })),
            None
        );
        assert_eq!(
            identify_success(&json!({
                "type": "RESPONSE",
                "operation": "IDENTIFY",
                "result": "SUCCESS"
            })),
            None
        );
    }
}
