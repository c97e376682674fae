// neurograd-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul::mul_op, pow::pow_op};
use crate::value::Value;

/// Divides `a` by `b`, expressed as `a * b^-1`.
///
/// Because it is built from the same nodes, the result is bit-identical to
/// `a.mul(&b.powf(-1.0))`, in value and in gradients. Division by zero is not an error:
/// `b^-1` evaluates to an infinity and the gradients follow IEEE-754 arithmetic.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, &Value::new(-1.0)))
}

impl Value {
    pub fn div(&self, other: &Value) -> Value {
        div_op(self, other)
    }

    /// Divides by a literal, wrapped into a leaf node.
    pub fn div_scalar(&self, scalar: f64) -> Value {
        div_op(self, &Value::new(scalar))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
