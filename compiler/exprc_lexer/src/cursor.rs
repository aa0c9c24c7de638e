//! A position within the source buffer.
//!
//! The scanner and parser share one `Cursor` and move it forward as they
//! consume characters; there is no separate token stream.

use crate::scanner::is_whitespace;

/// Read position over an expression buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'src> {
    source: &'src str,
    offset: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self { source, offset: 0 }
    }

    /// The full buffer this cursor walks over.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset of the next unconsumed character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unconsumed tail of the buffer.
    pub fn rest(&self) -> &'src str {
        &self.source[self.offset..]
    }

    /// True once every character has been consumed.
    pub fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// The next character, without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes one character and returns it.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    /// Moves forward by `len` bytes of already-validated input.
    pub(crate) fn advance(&mut self, len: usize) {
        self.offset = (self.offset + len).min(self.source.len());
    }

    /// Consumes any run of whitespace.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.bump();
        }
    }
}
