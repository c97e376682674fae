// neurograd-core/src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::value::Value;

/// Adds two values: `a.data + b.data`.
///
/// The local derivative with respect to each operand is 1, so during backward both
/// operands receive the output's gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(Op::Add, vec![a.clone(), b.clone()])
}

impl Value {
    pub fn add(&self, other: &Value) -> Value {
        add_op(self, other)
    }

    /// Adds a literal, wrapped into a leaf node.
    pub fn add_scalar(&self, scalar: f64) -> Value {
        add_op(self, &Value::new(scalar))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
