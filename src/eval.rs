use crate::lexer::Op;
use crate::number::{MathError, Number};
use crate::parser::Node;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The tree contains `x` but no value was bound for it. Surfaced to
    /// callers as an absent result, like any other malformed input.
    #[error("unbound variable 'x'")]
    Unbound,
    #[error(transparent)]
    Math(#[from] MathError),
}

fn evaluate_binop(op: Op, lhs: Number, rhs: Number) -> Result<Number, MathError> {
    match op {
        Op::Add => Ok(lhs.add(rhs)),
        Op::Sub => Ok(lhs.sub(rhs)),
        Op::Mul => Ok(lhs.mul(rhs)),
        Op::Div => lhs.div(rhs),
    }
}

/// Walks the tree once, with `binding` substituted for every occurrence
/// of `x`. The tree is borrowed, so one parse can serve many bindings.
pub fn evaluate(node: &Node, binding: Option<Number>) -> Result<Number, EvalError> {
    match node {
        Node::Num(value) => Ok(*value),
        Node::Var => binding.ok_or(EvalError::Unbound),
        Node::Neg(arg) => Ok(evaluate(arg, binding)?.neg()),
        Node::BinOp(op, lhs, rhs) => {
            let x = evaluate(lhs, binding)?;
            let y = evaluate(rhs, binding)?;
            Ok(evaluate_binop(*op, x, y)?)
        }
    }
}
