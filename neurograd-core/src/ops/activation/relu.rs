use crate::autograd::Op;
use crate::value::Value;

/// Applies the Rectified Linear Unit: `max(0, x)`.
///
/// ReLU is not differentiable at 0; by convention no gradient flows through it there.
pub fn relu_op(input: &Value) -> Value {
    Value::from_op(Op::Relu, vec![input.clone()])
}

impl Value {
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
