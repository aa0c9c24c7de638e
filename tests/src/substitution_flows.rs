use exprc::{substitute_source, CliError, SubstitutionMode};
use exprc_ast::{replace_variable, ExpressionNode};
use exprc_eval::{evaluate, evaluate_in, Environment};
use exprc_parser::parse_default;
use pretty_assertions::assert_eq;

#[test]
fn session_flow_prints_before_and_after() {
    let report =
        substitute_source("5 * (a + 4) - 8", "a\n", "b - 1\n", SubstitutionMode::ByName).unwrap();
    assert_eq!(report.before, "5 * (a + 4) - 8");
    assert_eq!(report.after, "5 * (b - 1 + 4) - 8");
    assert_eq!(report.sites, 1);
}

#[test]
fn constant_substitution_fixes_value() {
    let mut tree = parse_default("2*a").unwrap();
    replace_variable(&mut tree, 'a', &parse_default("3+1").unwrap());
    assert_eq!(tree.to_string(), "2 * (3 + 1)");
    assert_eq!(evaluate(&tree, -99.0), 8.0);
}

#[test]
fn every_site_gets_its_own_copy() {
    let mut tree = parse_default("a * a").unwrap();
    let replacement = parse_default("b + 1").unwrap();
    assert_eq!(replace_variable(&mut tree, 'a', &replacement), 2);

    // Rewriting one copy leaves the other untouched.
    if let ExpressionNode::Binary(bin) = &mut tree {
        replace_variable(&mut bin.left, 'b', &ExpressionNode::constant(10.0));
    }
    assert_eq!(tree.to_string(), "(10 + 1) * (b + 1)");

    let env = Environment::new().with('b', 2.0);
    assert_eq!(evaluate_in(&tree, &env), Ok(33.0));
    // The replacement passed in is never consumed.
    assert_eq!(replacement.to_string(), "b + 1");
}

#[test]
fn missing_variable_leaves_tree_alone() {
    let report = substitute_source("1 + 2", "a", "b", SubstitutionMode::ByName).unwrap();
    assert_eq!(report.before, report.after);
    assert_eq!(report.sites, 0);
}

#[test]
fn bad_inputs_map_to_cli_errors() {
    let err = substitute_source("2 * a", "ab", "1", SubstitutionMode::ByName).unwrap_err();
    assert!(matches!(err, CliError::InvalidVariableName(ref name) if name == "ab"));
    assert_eq!(err.exit_code(), 1);

    let err = substitute_source("2 * a", "a", "", SubstitutionMode::ByName).unwrap_err();
    assert!(matches!(
        err,
        CliError::Parse {
            label: "sub expression",
            ..
        }
    ));
}

#[test]
fn json_report_has_stable_shape() {
    let report = substitute_source("a + b", "a", "2", SubstitutionMode::All).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["mode"], "all");
    assert_eq!(value["after"], "2 + 2");
    assert_eq!(value["sites"], 2);
}
