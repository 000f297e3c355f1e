use std::fmt;
use thiserror::Error;

/// Arithmetic failure during evaluation. Unlike a syntax problem, which
/// collapses to an absent result, this escapes the crate boundary as a
/// real error the caller must match on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Runtime value of the evaluator. Integer arithmetic stays integer for
/// `+ - *` and unary negation; any float operand, or division, promotes
/// to float. Integer overflow wraps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(x) => x as f64,
            Number::Float(x) => x,
        }
    }

    pub fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(x), Number::Int(y)) => Number::Int(x.wrapping_add(y)),
            (x, y) => Number::Float(x.as_f64() + y.as_f64()),
        }
    }

    pub fn sub(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(x), Number::Int(y)) => Number::Int(x.wrapping_sub(y)),
            (x, y) => Number::Float(x.as_f64() - y.as_f64()),
        }
    }

    pub fn mul(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(x), Number::Int(y)) => Number::Int(x.wrapping_mul(y)),
            (x, y) => Number::Float(x.as_f64() * y.as_f64()),
        }
    }

    /// True division: the result is always a float, even for two integer
    /// operands. A zero divisor of either variant is an error.
    pub fn div(self, other: Number) -> Result<Number, MathError> {
        if other.as_f64() == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Number::Float(self.as_f64() / other.as_f64()))
    }

    pub fn neg(self) -> Number {
        match self {
            Number::Int(x) => Number::Int(x.wrapping_neg()),
            Number::Float(x) => Number::Float(-x),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Int(x) => write!(f, "{}", x),
            // {:?} keeps the trailing ".0" so floats are visibly floats
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}
