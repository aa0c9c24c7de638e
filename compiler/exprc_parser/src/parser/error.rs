use exprc_lexer::ScanError;
use thiserror::Error;

/// Errors that can occur while parsing an expression.
///
/// Every variant except `EmptyExpression` records the byte offset of the
/// offending character.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input holds nothing but whitespace
    #[error("Expression is empty")]
    EmptyExpression,

    /// A number, variable or `(` follows an operand with no operator between them
    #[error("Unexpected operand '{found}' at offset {offset}: missing operator")]
    UnexpectedOperand { offset: usize, found: char },

    /// An operator appears with no left operand
    #[error("Operator '{operator}' at offset {offset} has no left operand")]
    DanglingOperator { offset: usize, operator: char },

    /// An operator symbol without a known priority
    #[error("Unknown operator '{symbol}' at offset {offset}")]
    UnknownOperator { offset: usize, symbol: char },

    /// Input ended, or a `)` was reached, where an operand was required
    #[error("Expected an operand at offset {offset}")]
    ExpectedOperand { offset: usize },

    /// A `-` with no left operand is not followed by a number literal
    #[error("Unary minus at offset {offset} must be followed by a number")]
    UnsupportedUnaryMinus { offset: usize },

    /// A `(` without its matching `)`
    #[error("Unclosed parenthesis opened at offset {offset}")]
    UnclosedParenthesis { offset: usize },

    /// A `)` without a matching `(`
    #[error("Unmatched ')' at offset {offset}")]
    UnmatchedClosingParenthesis { offset: usize },

    /// A character outside the expression alphabet
    #[error("Unexpected character '{found}' at offset {offset}")]
    UnexpectedCharacter { offset: usize, found: char },

    /// A malformed or out-of-range numeric literal
    #[error("Invalid number literal '{lexeme}' at offset {offset}")]
    InvalidNumber { offset: usize, lexeme: String },

    /// Parentheses or a resulting tree nested deeper than the configured limit
    #[error("Maximum nesting depth of {limit} exceeded at offset {offset}")]
    MaxNestingDepthExceeded { limit: usize, offset: usize },
}

impl ParseError {
    /// Byte offset of the offending input, if the error points at one.
    pub fn offset(&self) -> Option<usize> {
        use ParseError::*;
        match self {
            EmptyExpression => None,
            UnexpectedOperand { offset, .. }
            | DanglingOperator { offset, .. }
            | UnknownOperator { offset, .. }
            | ExpectedOperand { offset }
            | UnsupportedUnaryMinus { offset }
            | UnclosedParenthesis { offset }
            | UnmatchedClosingParenthesis { offset }
            | UnexpectedCharacter { offset, .. }
            | InvalidNumber { offset, .. }
            | MaxNestingDepthExceeded { offset, .. } => Some(*offset),
        }
    }

    /// Number of source characters the error covers.
    pub fn span_len(&self) -> usize {
        match self {
            ParseError::EmptyExpression => 0,
            ParseError::InvalidNumber { lexeme, .. } => lexeme.chars().count().max(1),
            _ => 1,
        }
    }
}

impl From<ScanError> for ParseError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::ExpectedNumber { offset } => ParseError::UnsupportedUnaryMinus { offset },
            ScanError::InvalidNumber { offset, lexeme } => ParseError::InvalidNumber { offset, lexeme },
            ScanError::ExpectedLetter {
                offset,
                found: Some(found),
            } => ParseError::UnexpectedCharacter { offset, found },
            ScanError::ExpectedLetter { offset, found: None } => {
                ParseError::ExpectedOperand { offset }
            }
        }
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
