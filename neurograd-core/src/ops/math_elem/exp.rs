// neurograd-core/src/ops/math_elem/exp.rs

use crate::autograd::Op;
use crate::value::Value;

/// Computes `e^x`. Backward reuses the output: `grad * e^x`.
pub fn exp_op(input: &Value) -> Value {
    Value::from_op(Op::Exp, vec![input.clone()])
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::grad_check::check_grad;
    use approx::assert_relative_eq;

    #[test]
    fn test_exp_forward() {
        assert_relative_eq!(exp_op(&Value::new(0.0)).data(), 1.0);
        assert_relative_eq!(exp_op(&Value::new(1.0)).data(), std::f64::consts::E);
        assert_eq!(exp_op(&Value::new(1.0)).op(), Op::Exp);
    }

    #[test]
    fn test_exp_backward() {
        let a = Value::new(1.5);
        let b = a.exp();
        b.backward();
        assert_relative_eq!(a.grad(), 1.5f64.exp());
    }

    #[test]
    fn test_exp_grad_check() {
        let func = |x: &[Value]| Ok(exp_op(&x[0]).mul_scalar(0.5));
        let result = check_grad(func, &[-0.6], 1e-6, 1e-6);
        assert!(result.is_ok(), "Exp grad check failed: {:?}", result.err());
    }
}
