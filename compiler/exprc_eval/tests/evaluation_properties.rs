use exprc_ast::{replace_all_variables, replace_variable, ExpressionNode};
use exprc_eval::{evaluate, evaluate_in, evaluate_text, Environment, EvalError};
use exprc_parser::{parse_default, ParseError};
use proptest::prelude::*;

fn additive() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-')]
}

fn multiplicative() -> impl Strategy<Value = char> {
    prop_oneof![Just('*'), Just('/')]
}

fn apply(op: char, left: f64, right: f64) -> f64 {
    match op {
        '+' => left + right,
        '-' => left - right,
        '*' => left * right,
        '/' => left / right,
        other => panic!("not an operator: {other}"),
    }
}

#[test]
fn test_single_numeral_ignores_binding() {
    for binding in [-3.0, 0.0, 1.5, 1.0e9] {
        assert_eq!(evaluate_text("42", binding).unwrap(), 42.0);
    }
}

#[test]
fn test_substituted_tree_has_no_variables_left() {
    let mut tree = parse_default("2*a").unwrap();
    let replacement = parse_default("3+1").unwrap();

    assert_eq!(replace_variable(&mut tree, 'a', &replacement), 1);
    assert!(tree.variables().is_empty());
    for binding in [-10.0, 0.0, 7.25] {
        assert_eq!(evaluate(&tree, binding), 8.0);
    }
}

#[test]
fn test_substitution_with_variable_replacement() {
    // 5 * (a + 4) - 8 with a := b * 2, then b = 3  =>  5 * 10 - 8
    let mut tree = parse_default("5 * (a + 4) - 8").unwrap();
    replace_variable(&mut tree, 'a', &parse_default("b * 2").unwrap());
    assert_eq!(tree.to_string(), "5 * (b * 2 + 4) - 8");

    let env = Environment::new().with('b', 3.0);
    assert_eq!(evaluate_in(&tree, &env).unwrap(), 42.0);
}

#[test]
fn test_long_flat_chain_is_rejected_instead_of_overflowing() {
    let chain = vec!["1"; 50_000].join(" + ");
    assert!(matches!(
        evaluate_text(&chain, 0.0),
        Err(EvalError::Parse(ParseError::MaxNestingDepthExceeded { .. }))
    ));

    let within_limit = vec!["1"; 1000].join(" + ");
    assert_eq!(evaluate_text(&within_limit, 0.0), Ok(1000.0));
    assert_eq!(parse_default(&within_limit).unwrap().to_string(), within_limit);
}

proptest! {
    #[test]
    fn prop_additive_chain_is_left_associative(
        a in 1i32..1000, b in 1i32..1000, c in 1i32..1000,
        op1 in additive(), op2 in additive(),
    ) {
        let text = format!("{a} {op1} {b} {op2} {c}");
        let expected = apply(op2, apply(op1, a.into(), b.into()), c.into());
        prop_assert_eq!(evaluate_text(&text, 0.0).unwrap(), expected);
    }

    #[test]
    fn prop_multiplicative_chain_is_left_associative(
        a in 1i32..1000, b in 1i32..1000, c in 1i32..1000,
        op1 in multiplicative(), op2 in multiplicative(),
    ) {
        let text = format!("{a} {op1} {b} {op2} {c}");
        let expected = apply(op2, apply(op1, a.into(), b.into()), c.into());
        prop_assert_eq!(evaluate_text(&text, 0.0).unwrap(), expected);
    }

    #[test]
    fn prop_substituting_absent_variable_changes_nothing(
        binding in -1.0e6f64..1.0e6f64,
        text in prop_oneof![
            Just("5 * (a + 4) - 8"),
            Just("a / b - c * 2"),
            Just("(25 + 4) * -6"),
        ],
    ) {
        let original = parse_default(text).unwrap();
        let mut rewritten = original.clone();
        let replacement = ExpressionNode::constant(123.0);

        prop_assert_eq!(replace_variable(&mut rewritten, 'x', &replacement), 0);
        let before = evaluate(&original, binding);
        let after = evaluate(&rewritten, binding);
        prop_assert!(before == after || (before.is_nan() && after.is_nan()));
    }

    #[test]
    fn prop_replace_all_removes_every_variable(binding in -100.0f64..100.0f64) {
        let mut tree = parse_default("a * b + c - a / 4").unwrap();
        let replacement = parse_default("2 + 2").unwrap();
        prop_assert_eq!(replace_all_variables(&mut tree, &replacement), 4);
        prop_assert!(tree.variables().is_empty());
        prop_assert_eq!(evaluate(&tree, binding), 4.0 * 4.0 + 4.0 - 4.0 / 4.0);
    }
}
