use exprc_ast::{replace_all_variables, replace_variable, ExpressionNode};
use exprc_eval::{evaluate, evaluate_in, Environment, EvalError};
use exprc_parser::parser::{render_snippet, Diagnostic};
use exprc_parser::{parse_default, ParseError};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{label}: {source}")]
    Parse {
        label: &'static str,
        text: String,
        #[source]
        source: ParseError,
    },

    #[error("variable name must be a single letter, got {0:?}")]
    InvalidVariableName(String),

    #[error("invalid binding {0:?}: expected NAME=VALUE, e.g. a=3")]
    InvalidBinding(String),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("failed to serialize output: {0}")]
    Serialize(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Serialize(_) => 2,
            _ => 1,
        }
    }

    /// Human-readable report; parse errors include a source snippet.
    pub fn render(&self) -> String {
        match self {
            CliError::Parse {
                label,
                text,
                source,
            } => format!(
                "in {label}:\n{}",
                render_snippet(&Diagnostic::from(source), text)
            ),
            other => format!("error: {other}"),
        }
    }
}

/// Which variable leaves a substitution rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionMode {
    /// Only leaves carrying the requested name
    ByName,
    /// Every variable leaf, whatever its name
    All,
}

/// Outcome of substituting a sub-expression into an expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstitutionReport {
    pub variable: char,
    pub mode: SubstitutionMode,
    pub before: String,
    pub after: String,
    pub sites: usize,
}

/// Parses `text`, tagging failures with the input they came from.
pub fn parse_labeled(label: &'static str, text: &str) -> Result<ExpressionNode, CliError> {
    parse_default(text).map_err(|source| CliError::Parse {
        label,
        text: text.to_string(),
        source,
    })
}

/// Reads a variable name: exactly one ASCII letter, surrounding whitespace ignored.
pub fn parse_variable_name(text: &str) -> Result<char, CliError> {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(name), None) if name.is_ascii_alphabetic() => Ok(name),
        _ => Err(CliError::InvalidVariableName(trimmed.to_string())),
    }
}

/// Reads a `NAME=VALUE` binding.
pub fn parse_binding(text: &str) -> Result<(char, f64), CliError> {
    let invalid = || CliError::InvalidBinding(text.to_string());
    let (name, value) = text.split_once('=').ok_or_else(invalid)?;
    let name = parse_variable_name(name).map_err(|_| invalid())?;
    let value = value.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok((name, value))
}

/// Parses both expressions and splices `substitution` into `expression`.
pub fn substitute_source(
    expression: &str,
    variable: &str,
    substitution: &str,
    mode: SubstitutionMode,
) -> Result<SubstitutionReport, CliError> {
    let mut tree = parse_labeled("expression", expression)?;
    let variable = parse_variable_name(variable)?;
    let replacement = parse_labeled("sub expression", substitution)?;

    let before = tree.to_string();
    let sites = match mode {
        SubstitutionMode::ByName => replace_variable(&mut tree, variable, &replacement),
        SubstitutionMode::All => replace_all_variables(&mut tree, &replacement),
    };
    log::info!("substituted {sites} occurrence(s) of '{variable}'");

    Ok(SubstitutionReport {
        variable,
        mode,
        before,
        after: tree.to_string(),
        sites,
    })
}

/// Parses and evaluates `expression`.
///
/// Without explicit bindings every variable takes `value` (0 if absent).
/// With bindings, names are looked up and `value` acts as the fallback.
pub fn evaluate_source(
    expression: &str,
    value: Option<f64>,
    bindings: &[(char, f64)],
) -> Result<f64, CliError> {
    let tree = parse_labeled("expression", expression)?;
    if bindings.is_empty() {
        return Ok(evaluate(&tree, value.unwrap_or(0.0)));
    }
    let mut env: Environment = bindings.iter().copied().collect();
    env.set_fallback(value);
    Ok(evaluate_in(&tree, &env)?)
}

/// Parses `expression` and renders its tree as pretty JSON.
pub fn tree_json(expression: &str) -> Result<String, CliError> {
    let tree = parse_labeled("expression", expression)?;
    exprc_ast::to_json(&tree).map_err(|e| CliError::Serialize(e.to_string()))
}
