//! Scanner primitives for infix arithmetic expressions
//!
//! There is no token stream: the parser walks the source with a [`Cursor`]
//! and calls the readers in [`scanner`] whenever the next character starts a
//! literal or a variable.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod scanner;

// Re-export the main types for convenience
pub use cursor::Cursor;
pub use error::{ScanError, ScanResult};
pub use scanner::{
    is_digit, is_letter, is_operator_symbol, is_whitespace, read_number, read_variable,
};
