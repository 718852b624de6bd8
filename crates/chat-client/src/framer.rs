//! Incremental newline framing over arbitrary reads.

use thiserror::Error;

/// Framing error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FramerError {
    #[error("out of memory while buffering input")]
    OutOfMemory,
}

/// Accumulates raw bytes and hands out complete newline-terminated
/// records, regardless of how the input was split across reads.
///
/// There is no line-length limit: a long line without a newline grows
/// the buffer until one arrives. Acceptable for a trusted local
/// protocol.
#[derive(Debug, Default)]
pub struct LineFramer {
    buf: Vec<u8>,
}

impl LineFramer {
    /// Create an empty framer.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Append raw input bytes.
    ///
    /// Growth is geometric; the buffer never shrinks.
    ///
    /// # Errors
    /// Returns `OutOfMemory` when the allocation fails or the total
    /// length would overflow.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), FramerError> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.buf
            .len()
            .checked_add(bytes.len())
            .ok_or(FramerError::OutOfMemory)?;
        self.buf
            .try_reserve(bytes.len())
            .map_err(|_| FramerError::OutOfMemory)?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Pop the next complete record, without its trailing newline.
    ///
    /// Consumed bytes are compacted out of the buffer. Returns `None`
    /// when no newline is present in the unconsumed region; call
    /// repeatedly after each `append` to drain every buffered line.
    pub fn pop_line(&mut self) -> Option<Vec<u8>> {
        let newline = self.buf.iter().position(|&b| b == b'\n')?;
        let line = self.buf[..newline].to_vec();
        self.buf.drain(..=newline);
        Some(line)
    }

    /// Number of buffered, unconsumed bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether no bytes are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
