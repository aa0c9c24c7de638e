use std::fmt::Write as _;

use super::error::ParseError;

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

/// A user-facing diagnostic describing a problem in an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Byte offset of the first offending character
    pub offset: usize,
    /// Number of characters to underline
    pub len: usize,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic with an explicit location
    pub fn at_offset<S: Into<String>>(offset: usize, len: usize, message: S) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            offset,
            len,
            help: None,
        }
    }

    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: err.to_string(),
            offset: err.offset().unwrap_or(0),
            len: err.span_len(),
            help: help_for_error(err),
        }
    }
}

/// Provide a hint for the common mistakes behind each error
fn help_for_error(err: &ParseError) -> Option<String> {
    use ParseError::*;
    let help = match err {
        EmptyExpression => "Enter an expression such as '2 * a + 1'",
        UnexpectedOperand { .. } => "Insert an operator (+, -, *, /) between the two operands",
        DanglingOperator { .. } => "Operators need a value on their left, e.g. '2 * 3'",
        UnknownOperator { .. } => "Only +, -, * and / are supported",
        ExpectedOperand { .. } => "An operator or '(' must be followed by a value",
        UnsupportedUnaryMinus { .. } => {
            "A leading '-' is only allowed directly before a number; write '0 - x' to negate"
        }
        UnclosedParenthesis { .. } => "Did you forget a matching ')'?",
        UnmatchedClosingParenthesis { .. } => "Did you forget a matching '(' earlier?",
        UnexpectedCharacter { .. } => {
            "Expressions may contain numbers, single-letter variables, + - * / and parentheses"
        }
        InvalidNumber { .. } => "Numbers look like 42, 3.5 or 1.2e-3",
        MaxNestingDepthExceeded { .. } => "Reduce nested parentheses or split long operator chains",
    };
    Some(help.to_string())
}

/// Render a diagnostic as a source snippet with the offending span underlined.
///
/// ```text
/// error: Operator '*' at offset 4 has no left operand
///  --> line 1, col 5
///   |
/// 1 | 2 + * 3
///   |     ^
///   = help: Operators need a value on their left, e.g. '2 * 3'
/// ```
pub fn render_snippet(diag: &Diagnostic, source: &str) -> String {
    let offset = clamp_to_char_boundary(source, diag.offset);
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[offset..]
        .find('\n')
        .map_or(source.len(), |i| offset + i);
    let line_no = source[..line_start].matches('\n').count() + 1;
    let column = source[line_start..offset].chars().count() + 1;
    let text = source[line_start..line_end].trim_end_matches('\r');

    let gutter = " ".repeat(line_no.to_string().len());
    let underline = if diag.len <= 1 {
        "^".to_string()
    } else {
        "~".repeat(diag.len)
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", diag.severity.label(), diag.message);
    let _ = writeln!(out, "{gutter}--> line {line_no}, col {column}");
    let _ = writeln!(out, "{gutter} |");
    let _ = writeln!(out, "{line_no} | {text}");
    let _ = write!(out, "{gutter} | {}{underline}", " ".repeat(column - 1));
    if let Some(help) = &diag.help {
        let _ = write!(out, "\n{gutter} = help: {help}");
    }
    out
}

fn clamp_to_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
