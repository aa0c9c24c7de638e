//! Evaluation of expression trees.
//!
//! [`evaluate`] implements the single-binding model: every variable, whatever
//! its name, takes the one supplied value. [`evaluate_in`] looks names up in
//! an [`Environment`] and reports unbound variables.

pub mod env;
pub mod evaluator;

pub use env::Environment;
pub use evaluator::{evaluate, evaluate_in, evaluate_text, EvalError, Evaluator};
