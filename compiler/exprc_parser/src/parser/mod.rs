// Parser for infix arithmetic expressions.
// There is no token stream: the precedence-climbing loop in `expressions`
// reads characters straight off a `Cursor` using the scanner primitives.

pub mod diagnostics;
pub mod error;
pub mod expressions;


pub use diagnostics::{render_snippet, Diagnostic, Severity};
pub use error::{ParseError, ParseResult};
pub use exprc_lexer::Cursor;
pub use expressions::{parse_expression, ExpressionParser};

use exprc_ast::{ExpressionNode, NO_PRIORITY};

/// Nesting depth used when no explicit limit is configured.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 1024;

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum depth of parenthesised groups, and of the resulting tree.
    /// Evaluation, printing and dropping all recurse over the tree, so input
    /// nested deeper fails with `MaxNestingDepthExceeded` instead of
    /// exhausting the call stack later.
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// Parses a complete expression with the default configuration.
///
/// # Examples
///
/// ```
/// use exprc_parser::parse_default;
///
/// let expr = parse_default("5 * (a + 4) - 8").unwrap();
/// assert_eq!(expr.to_string(), "5 * (a + 4) - 8");
/// assert!(parse_default("").is_err());
/// ```
pub fn parse_default(text: &str) -> ParseResult<ExpressionNode> {
    parse_with_config(text, &ParserConfig::default())
}

/// Parses a complete expression, rejecting anything left over.
pub fn parse_with_config(text: &str, config: &ParserConfig) -> ParseResult<ExpressionNode> {
    log::debug!("=== parse_with_config ===");
    log::debug!("Input length: {}", text.len());

    if text.trim().is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut cursor = Cursor::new(text);
    let result = ExpressionParser::new(&mut cursor, config).parse_expression(NO_PRIORITY);

    let expr = match result {
        Ok(expr) => expr,
        Err(e) => {
            log::debug!("parse_with_config failed: {e}");
            return Err(e);
        }
    };

    // The top-level loop only stops early at a ')'
    cursor.skip_whitespace();
    if let Some(found) = cursor.peek() {
        let offset = cursor.offset();
        let err = if found == ')' {
            ParseError::UnmatchedClosingParenthesis { offset }
        } else {
            ParseError::UnexpectedCharacter { offset, found }
        };
        log::debug!("parse_with_config failed: {err}");
        return Err(err);
    }

    log::debug!("parse_default success: {} nodes", expr.node_count());
    Ok(expr)
}
