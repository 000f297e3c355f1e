//! Arithmetic expression calculator with one free variable.
//!
//! The pipeline is text -> [`tokenize`] -> [`parse`] -> [`evaluate`].
//! [`calculate`] runs it end to end; [`substitute`] does the same with a
//! value bound to `x`. Both are pure and keep no state between calls, so
//! callers on different threads need no synchronization.
//!
//! Failures arrive on two separate channels, and callers must keep them
//! apart: malformed input of any kind yields `Ok(None)`, while division
//! by zero during evaluation is a real [`MathError`].

pub mod chart;
mod eval;
mod lexer;
mod number;
mod parser;

pub use eval::{evaluate, EvalError};
pub use lexer::{tokenize, Lexer, Op, Token};
pub use number::{MathError, Number};
pub use parser::{parse, Node};

/// Scans and parses `expr` into a tree, or `None` if it is malformed.
/// Useful when the same expression will be evaluated under many
/// bindings, as the plotter does.
pub fn parse_expression(expr: &str) -> Option<Node> {
    parse(tokenize(expr))
}

/// Evaluates a closed expression (one without `x`).
///
/// ```
/// use plotcalc::{calculate, Number};
///
/// assert_eq!(calculate("2+2"), Ok(Some(Number::Int(4))));
/// assert_eq!(calculate("2/2"), Ok(Some(Number::Float(1.0))));
/// assert_eq!(calculate("2+"), Ok(None));
/// assert!(calculate("1/0").is_err());
/// ```
pub fn calculate(expr: &str) -> Result<Option<Number>, MathError> {
    run(expr, None)
}

/// Evaluates `expr` with `value` substituted for every occurrence of `x`.
///
/// ```
/// use plotcalc::{substitute, Number};
///
/// assert_eq!(substitute("x*x", Number::Int(3)), Ok(Some(Number::Int(9))));
/// assert_eq!(
///     substitute("x+1", Number::Float(2.5)),
///     Ok(Some(Number::Float(3.5)))
/// );
/// ```
pub fn substitute(expr: &str, value: Number) -> Result<Option<Number>, MathError> {
    run(expr, Some(value))
}

fn run(expr: &str, binding: Option<Number>) -> Result<Option<Number>, MathError> {
    let node = match parse_expression(expr) {
        Some(node) => node,
        None => return Ok(None),
    };

    match evaluate(&node, binding) {
        Ok(value) => Ok(Some(value)),
        Err(EvalError::Unbound) => Ok(None),
        Err(EvalError::Math(err)) => Err(err),
    }
}
