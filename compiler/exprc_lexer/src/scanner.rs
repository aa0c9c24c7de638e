//! Character classification and single-token readers.
//!
//! These work directly on a [`Cursor`]; the parser decides which reader to
//! call by peeking at the next character.

use nom::error::Error as NomError;
use nom::number::complete::recognize_float;
use nom::Err as NomErr;

#[cfg(feature = "logging")]
use log::trace;

use crate::cursor::Cursor;
use crate::error::{ScanError, ScanResult};

/// Returns true for the ASCII digits `0-9`.
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Returns true for the ASCII letters that name variables.
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Returns true for whitespace separating tokens.
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Returns true iff `ch` is one of `+ - * /`.
pub fn is_operator_symbol(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/')
}

/// Reads a decimal floating-point literal starting at the cursor.
///
/// Accepts an optional leading sign, integer digits, an optional fractional
/// part and an optional exponent (`-12.5e-3`). The caller only invokes this on
/// a digit or on a `-` that cannot be a binary operator.
pub fn read_number(cursor: &mut Cursor<'_>) -> ScanResult<f64> {
    let start = cursor.offset();
    let rest = cursor.rest();

    let lexeme = match recognize_float::<&str, NomError<&str>>(rest) {
        Ok((_, lexeme)) => lexeme,
        Err(NomErr::Failure(_)) => {
            return Err(ScanError::InvalidNumber {
                offset: start,
                lexeme: malformed_lexeme(rest).to_string(),
            })
        }
        Err(_) => return Err(ScanError::ExpectedNumber { offset: start }),
    };

    let value = lexeme
        .parse::<f64>()
        .map_err(|_| ScanError::InvalidNumber {
            offset: start,
            lexeme: lexeme.to_string(),
        })?;
    if !value.is_finite() {
        return Err(ScanError::InvalidNumber {
            offset: start,
            lexeme: lexeme.to_string(),
        });
    }

    cursor.advance(lexeme.len());
    #[cfg(feature = "logging")]
    trace!("read number {value} from {lexeme:?} at {start}");
    Ok(value)
}

/// Reads a single-letter variable name and moves past it.
pub fn read_variable(cursor: &mut Cursor<'_>) -> ScanResult<char> {
    let offset = cursor.offset();
    match cursor.peek() {
        Some(ch) if is_letter(ch) => {
            cursor.bump();
            #[cfg(feature = "logging")]
            trace!("read variable {ch:?} at {offset}");
            Ok(ch)
        }
        found => Err(ScanError::ExpectedLetter { offset, found }),
    }
}

/// The run of characters a malformed literal is made of, for error reporting.
fn malformed_lexeme(rest: &str) -> &str {
    let mut end = 0;
    for (idx, ch) in rest.char_indices() {
        let sign = (ch == '-' || ch == '+') && (idx == 0 || rest[..idx].ends_with(['e', 'E']));
        if !(sign || ch.is_ascii_alphanumeric() || ch == '.') {
            break;
        }
        end = idx + ch.len_utf8();
    }
    &rest[..end]
}
