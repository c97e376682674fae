// neurograd-core/src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul::mul_op;
use crate::value::Value;

/// Negates a value, expressed as a multiplication by the literal -1.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

impl Value {
    pub fn neg(&self) -> Value {
        neg_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
