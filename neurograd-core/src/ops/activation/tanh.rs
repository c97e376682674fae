use crate::autograd::Op;
use crate::value::Value;

/// Applies the hyperbolic tangent. Backward uses the output: `1 - tanh(x)^2`.
pub fn tanh_op(input: &Value) -> Value {
    Value::from_op(Op::Tanh, vec![input.clone()])
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}
