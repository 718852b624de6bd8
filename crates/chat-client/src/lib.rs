//! Client-side core for the line-delimited JSON chat protocol.
//!
//! This crate provides the pieces between raw bytes and protocol
//! messages:
//! - `LineFramer` - incremental newline framing over arbitrary reads
//! - `tokenize` - shell-like splitting with quoting and escapes
//! - `interpret` - mapping of typed input lines to protocol messages
//! - `render` - human-readable rendering of decoded server messages
//! - `Session` - the loop that multiplexes the server and user input

pub mod command;
pub mod framer;
pub mod render;
pub mod session;
pub mod tokenizer;

pub use command::{Command, CommandError, interpret};
pub use framer::{FramerError, LineFramer};
pub use render::{RenderError, render};
pub use session::{Session, SessionError, SessionState};
pub use tokenizer::{TokenizeError, tokenize};
