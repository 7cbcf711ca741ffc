use std::fmt;

use thiserror::Error;

/// Error aborting a parse. The parse either completes fully or stops at the
/// first error; output written so far is left in place.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A read from the input or a write to the output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The stream violated the suppression-block structure.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// A structural byte (`{` or `}`) was missing where the state machine
/// requires it, or the stream ended mid-block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolError {
    /// The structural byte the parser required.
    pub expected: u8,
    /// The byte actually consumed, or `None` at end of input.
    pub found: Option<u8>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected '{}' but found ", char::from(self.expected))?;
        match self.found {
            Some(byte) => write!(f, "'{}'", char::from(byte)),
            None => write!(f, "end of input"),
        }
    }
}

impl std::error::Error for ProtocolError {}
