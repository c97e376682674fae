// neurograd-core/src/ops/arithmetic/mul.rs

use crate::autograd::Op;
use crate::value::Value;

/// Multiplies two values: `a.data * b.data`.
///
/// Backward: `a` receives `grad * b.data` and `b` receives `grad * a.data`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(Op::Mul, vec![a.clone(), b.clone()])
}

impl Value {
    pub fn mul(&self, other: &Value) -> Value {
        mul_op(self, other)
    }

    /// Multiplies by a literal, wrapped into a leaf node.
    pub fn mul_scalar(&self, scalar: f64) -> Value {
        mul_op(self, &Value::new(scalar))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
