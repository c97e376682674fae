// Catalog of differentiable scalar operations.
use crate::error::NeuroGradError;

/// Tag identifying the operation that produced a node.
///
/// The set is closed: every tag carries its forward formula ([`Op::forward`]) and its local
/// backward rule ([`Op::local_gradients`]) in this file, and both are matched exhaustively,
/// so a new tag cannot be added without both. Negation, subtraction and division are not
/// tags; they are expressed with `Mul`, `Add` and `Pow` by the operator overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Leaf sentinel (input, constant or parameter).
    None,
    Add,
    Mul,
    /// `base ** exponent`, the exponent being a node as well.
    Pow,
    Relu,
    Tanh,
    Exp,
}

impl Op {
    /// Number of operands the operation consumes.
    pub fn arity(self) -> usize {
        match self {
            Op::None => 0,
            Op::Relu | Op::Tanh | Op::Exp => 1,
            Op::Add | Op::Mul | Op::Pow => 2,
        }
    }

    /// Short symbol used when rendering the graph.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::None => "",
            Op::Add => "+",
            Op::Mul => "*",
            Op::Pow => "**",
            Op::Relu => "relu",
            Op::Tanh => "tanh",
            Op::Exp => "exp",
        }
    }

    fn arity_error(self, actual: usize) -> NeuroGradError {
        NeuroGradError::ArityMismatch {
            op: self,
            expected: self.arity(),
            actual,
        }
    }

    /// Evaluates the forward formula on the operands' data.
    ///
    /// Domain errors are not raised: a negative base under a fractional exponent yields
    /// NaN and a zero base under a negative exponent yields an infinity, as `f64` does.
    pub fn forward(self, inputs: &[f64]) -> Result<f64, NeuroGradError> {
        match (self, inputs) {
            (Op::None, _) => Err(NeuroGradError::InvalidConfiguration(
                "a leaf has no forward formula".to_string(),
            )),
            (Op::Add, &[a, b]) => Ok(a + b),
            (Op::Mul, &[a, b]) => Ok(a * b),
            (Op::Pow, &[base, exponent]) => Ok(base.powf(exponent)),
            (Op::Relu, &[a]) => Ok(if a > 0.0 { a } else { 0.0 }),
            (Op::Tanh, &[a]) => Ok(a.tanh()),
            (Op::Exp, &[a]) => Ok(a.exp()),
            (op, _) => Err(op.arity_error(inputs.len())),
        }
    }

    /// Local backward rule: the partial derivative of the output with respect to each
    /// operand, given the operands' data (`inputs`) and the node's own data (`output`).
    ///
    /// The backward pass multiplies each entry by the node's gradient and accumulates it
    /// into the matching operand.
    pub fn local_gradients(self, inputs: &[f64], output: f64) -> Result<Vec<f64>, NeuroGradError> {
        match (self, inputs) {
            (Op::None, &[]) => Ok(Vec::new()),
            (Op::Add, &[_, _]) => Ok(vec![1.0, 1.0]),
            (Op::Mul, &[a, b]) => Ok(vec![b, a]),
            (Op::Pow, &[base, exponent]) => Ok(vec![
                pow_base_gradient(base, exponent),
                pow_exponent_gradient(base, output),
            ]),
            // Not differentiable at 0; no gradient flows through the boundary.
            (Op::Relu, &[_]) => Ok(vec![if output > 0.0 { 1.0 } else { 0.0 }]),
            (Op::Tanh, &[_]) => Ok(vec![1.0 - output * output]),
            (Op::Exp, &[_]) => Ok(vec![output]),
            (op, _) => Err(op.arity_error(inputs.len())),
        }
    }
}

/// d(base ** exponent)/d(base) = exponent * base ** (exponent - 1).
///
/// A zero exponent makes the output constant, so the partial is 0 even at a zero base where
/// the formula would give `0 * inf`.
fn pow_base_gradient(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        0.0
    } else {
        exponent * base.powf(exponent - 1.0)
    }
}

/// d(base ** exponent)/d(exponent) = ln(base) * output.
///
/// Only defined for a positive base. A zero base contributes nothing. For a negative base
/// the true derivative is complex; the real-valued approximation `-ln(|base|) * output` is
/// returned instead. Exponents are almost always constants, so this branch is rarely hit.
fn pow_exponent_gradient(base: f64, output: f64) -> f64 {
    if base > 0.0 {
        base.ln() * output
    } else if base == 0.0 {
        0.0
    } else {
        -base.abs().ln() * output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arity() {
        assert_eq!(Op::None.arity(), 0);
        for op in [Op::Relu, Op::Tanh, Op::Exp] {
            assert_eq!(op.arity(), 1, "{:?} should be unary", op);
        }
        for op in [Op::Add, Op::Mul, Op::Pow] {
            assert_eq!(op.arity(), 2, "{:?} should be binary", op);
        }
    }

    #[test]
    fn test_forward_rejects_wrong_arity() {
        let err = Op::Pow.forward(&[2.0]).unwrap_err();
        assert_eq!(
            err,
            NeuroGradError::ArityMismatch { op: Op::Pow, expected: 2, actual: 1 }
        );
        assert!(Op::Tanh.forward(&[1.0, 2.0]).is_err());
        assert!(Op::None.forward(&[]).is_err());
    }

    #[test]
    fn test_local_gradients_reject_wrong_arity() {
        let err = Op::Pow.local_gradients(&[2.0, 3.0, 4.0], 8.0).unwrap_err();
        assert_eq!(
            err,
            NeuroGradError::ArityMismatch { op: Op::Pow, expected: 2, actual: 3 }
        );
        assert!(Op::Relu.local_gradients(&[], 0.0).is_err());
    }

    #[test]
    fn test_pow_exponent_gradient_branches() {
        // base > 0
        let out = 2.0f64.powf(3.0);
        let grads = Op::Pow.local_gradients(&[2.0, 3.0], out).unwrap();
        assert_relative_eq!(grads[0], 12.0);
        assert_relative_eq!(grads[1], 2.0f64.ln() * 8.0);

        // base == 0
        let grads = Op::Pow.local_gradients(&[0.0, 2.0], 0.0).unwrap();
        assert_eq!(grads[1], 0.0);

        // base < 0: known real-valued approximation, not the true (complex) derivative
        let out = (-2.0f64).powf(2.0);
        let grads = Op::Pow.local_gradients(&[-2.0, 2.0], out).unwrap();
        assert_relative_eq!(grads[1], -(2.0f64.ln()) * 4.0);
    }

    #[test]
    fn test_relu_boundary_has_no_gradient() {
        assert_eq!(Op::Relu.local_gradients(&[0.0], 0.0).unwrap(), vec![0.0]);
        assert_eq!(Op::Relu.local_gradients(&[-1.0], 0.0).unwrap(), vec![0.0]);
        assert_eq!(Op::Relu.local_gradients(&[0.5], 0.5).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Op::None.symbol(), "");
        assert_eq!(Op::Pow.symbol(), "**");
        assert_eq!(Op::Tanh.symbol(), "tanh");
    }
}
