//! Transport-layer error types.

use cardex_types::{CardexError, ErrorKind};
use thiserror::Error;

/// Errors from the stdio transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to read from stdin.
    #[error("read error: {0}")]
    Read(String),
    /// Failed to write to stdout.
    #[error("write error: {0}")]
    Write(String),
    /// Failed to parse incoming JSON message.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<TransportError> for CardexError {
    fn from(e: TransportError) -> Self {
        let kind = match &e {
            TransportError::Parse(_) => ErrorKind::InvalidInput,
            _ => ErrorKind::Internal,
        };
        CardexError::new(kind, e.to_string())
    }
}
