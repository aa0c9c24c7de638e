use exprc_ast::{BinaryOperator, ExpressionNode, NO_PRIORITY};
use exprc_lexer::{
    is_digit, is_letter, is_operator_symbol, is_whitespace, read_number, read_variable, Cursor,
};

use super::error::{ParseError, ParseResult};
use super::ParserConfig;

/// Precedence-climbing parser working directly over a [`Cursor`].
///
/// The pending left operand lives in a local accumulator of each
/// `parse_expression` frame; the only state shared across frames is the
/// cursor and the current nesting depth.
///
/// `max_nesting_depth` bounds both the parser's own recursion and the depth of
/// the tree it builds. A flat chain such as `1 + 1 + ... + 1` nests to the left
/// one level per operator, so it counts against the same limit.
pub struct ExpressionParser<'c, 'src> {
    cursor: &'c mut Cursor<'src>,
    max_depth: usize,
    depth: usize,
}

impl<'c, 'src> ExpressionParser<'c, 'src> {
    pub fn new(cursor: &'c mut Cursor<'src>, config: &ParserConfig) -> Self {
        Self {
            cursor,
            max_depth: config.max_nesting_depth,
            depth: 0,
        }
    }

    /// Parses the longest sub-expression whose top-level operators all have a
    /// priority of at least `min_priority`.
    ///
    /// Stops without consuming at end of input, at a `)`, or at an operator
    /// binding looser than `min_priority`; that operator belongs to an
    /// enclosing call.
    pub fn parse_expression(&mut self, min_priority: u8) -> ParseResult<ExpressionNode> {
        self.parse_level(min_priority).map(|(expr, _)| expr)
    }

    // Returns the parsed tree together with its depth.
    fn parse_level(&mut self, min_priority: u8) -> ParseResult<(ExpressionNode, usize)> {
        let mut left: Option<(ExpressionNode, usize)> = None;

        while let Some(ch) = self.cursor.peek() {
            let offset = self.cursor.offset();

            if is_whitespace(ch) {
                self.cursor.bump();
                continue;
            }

            // A '-' with nothing on its left is the sign of a literal
            if is_digit(ch) || (ch == '-' && left.is_none()) {
                expect_no_operand(left.is_some(), offset, ch)?;
                left = Some((ExpressionNode::constant(read_number(self.cursor)?), 1));
                continue;
            }

            if is_letter(ch) {
                expect_no_operand(left.is_some(), offset, ch)?;
                left = Some((ExpressionNode::variable(read_variable(self.cursor)?), 1));
                continue;
            }

            if is_operator_symbol(ch) {
                // Only reachable if `is_operator_symbol` accepts a symbol that
                // `BinaryOperator` has no variant for.
                let operator = BinaryOperator::from_symbol(ch)
                    .ok_or(ParseError::UnknownOperator { offset, symbol: ch })?;
                let Some((lhs, lhs_depth)) = left.take() else {
                    return Err(ParseError::DanglingOperator {
                        offset,
                        operator: ch,
                    });
                };

                let priority = operator.priority();
                if priority < min_priority {
                    log::trace!("'{ch}' at {offset} yields to an enclosing operator");
                    return Ok((lhs, lhs_depth));
                }

                self.cursor.bump();
                // Equal-priority operators must stop the right operand so they
                // chain to the left.
                let (rhs, rhs_depth) =
                    self.nested(offset, |parser| parser.parse_level(priority + 1))?;
                let depth = 1 + lhs_depth.max(rhs_depth);
                if depth > self.max_depth {
                    return Err(ParseError::MaxNestingDepthExceeded {
                        limit: self.max_depth,
                        offset,
                    });
                }
                log::trace!("bound '{ch}' at {offset}");
                left = Some((ExpressionNode::binary(operator, lhs, rhs), depth));
                continue;
            }

            match ch {
                '(' => {
                    expect_no_operand(left.is_some(), offset, ch)?;
                    self.cursor.bump();
                    let inner = self.nested(offset, |parser| parser.parse_level(NO_PRIORITY))?;
                    if self.cursor.peek() != Some(')') {
                        return Err(ParseError::UnclosedParenthesis { offset });
                    }
                    self.cursor.bump();
                    left = Some(inner);
                }
                ')' => break,
                found => return Err(ParseError::UnexpectedCharacter { offset, found }),
            }
        }

        left.ok_or(ParseError::ExpectedOperand {
            offset: self.cursor.offset(),
        })
    }

    fn nested<T>(
        &mut self,
        offset: usize,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= self.max_depth {
            return Err(ParseError::MaxNestingDepthExceeded {
                limit: self.max_depth,
                offset,
            });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

fn expect_no_operand(has_operand: bool, offset: usize, found: char) -> ParseResult<()> {
    if has_operand {
        Err(ParseError::UnexpectedOperand { offset, found })
    } else {
        Ok(())
    }
}

/// Parses from `cursor` with the default [`ParserConfig`], leaving the cursor
/// on the first unconsumed character.
pub fn parse_expression(cursor: &mut Cursor<'_>, min_priority: u8) -> ParseResult<ExpressionNode> {
    ExpressionParser::new(cursor, &ParserConfig::default()).parse_expression(min_priority)
}
