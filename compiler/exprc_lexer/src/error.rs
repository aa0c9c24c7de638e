//! Scanner error types.

use thiserror::Error;

/// Errors raised by the single-token readers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScanError {
    /// No numeric literal starts at this offset.
    #[error("Expected a number at offset {offset}")]
    ExpectedNumber {
        /// Byte offset of the reader's starting position.
        offset: usize,
    },

    /// A literal was started but is malformed or out of range.
    #[error("Invalid number literal '{lexeme}' at offset {offset}")]
    InvalidNumber {
        /// Byte offset of the literal.
        offset: usize,
        /// The offending characters.
        lexeme: String,
    },

    /// A variable name was expected but something else was found.
    #[error("Expected a variable name at offset {offset}")]
    ExpectedLetter {
        /// Byte offset of the reader's starting position.
        offset: usize,
        /// The character actually present, if any.
        found: Option<char>,
    },
}

impl ScanError {
    /// Byte offset the error refers to.
    pub fn offset(&self) -> usize {
        match self {
            ScanError::ExpectedNumber { offset }
            | ScanError::InvalidNumber { offset, .. }
            | ScanError::ExpectedLetter { offset, .. } => *offset,
        }
    }
}

/// Result type for the scanner readers.
pub type ScanResult<T> = Result<T, ScanError>;
