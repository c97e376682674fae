// neurograd-core/src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::value::Value;

/// Raises `base` to the power `exponent`: `base.data.powf(exponent.data)`.
///
/// The exponent is a node too, so the same backward machinery applies to both operands:
/// * base: `grad * exponent * base^(exponent - 1)`
/// * exponent: `grad * ln(base) * output` for a positive base, 0 for a zero base, and the
///   real-valued approximation `-ln(|base|) * output` for a negative base.
///
/// Domain errors are not raised: a negative base with a fractional exponent gives NaN and
/// a zero base with a negative exponent gives an infinity.
pub fn pow_op(base: &Value, exponent: &Value) -> Value {
    Value::from_op(Op::Pow, vec![base.clone(), exponent.clone()])
}

impl Value {
    pub fn pow(&self, exponent: &Value) -> Value {
        pow_op(self, exponent)
    }

    /// Raises to a literal exponent, wrapped into a leaf node.
    pub fn powf(&self, exponent: f64) -> Value {
        pow_op(self, &Value::new(exponent))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
