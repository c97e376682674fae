// neurograd-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add::add_op, neg::neg_op};
use crate::value::Value;

/// Subtracts `b` from `a`, expressed as `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

impl Value {
    pub fn sub(&self, other: &Value) -> Value {
        sub_op(self, other)
    }

    /// Subtracts a literal, wrapped into a leaf node.
    pub fn sub_scalar(&self, scalar: f64) -> Value {
        sub_op(self, &Value::new(scalar))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
