//! Error types for blocksort operations.
//!
//! Precondition violations all share the [`BlocksortError::InvalidArgument`]
//! kind. The remaining variants come from the byte source/sink that feeds the
//! transforms.

use std::io;
use thiserror::Error;

/// The main error type for blocksort operations.
#[derive(Debug, Error)]
pub enum BlocksortError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller-supplied argument violates a precondition.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the violated precondition.
        message: String,
    },

    /// Unexpected end of input while reading a fixed-width field.
    #[error("Unexpected end of file: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },
}

/// Result type alias for blocksort operations.
pub type Result<T> = std::result::Result<T, BlocksortError>;

impl BlocksortError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid argument error for an index outside `[0, len)`.
    pub fn index_out_of_range(what: &str, index: usize, len: usize) -> Self {
        Self::invalid_argument(format!("{what} {index} out of range [0, {len})"))
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Whether this error is a precondition violation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BlocksortError::index_out_of_range("row", 7, 4);
        assert_eq!(err.to_string(), "Invalid argument: row 7 out of range [0, 4)");
        assert!(err.is_invalid_argument());

        let err = BlocksortError::unexpected_eof(3);
        assert!(err.to_string().contains("3 more bytes"));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: BlocksortError = io_err.into();
        assert!(matches!(err, BlocksortError::Io(_)));
    }
}
