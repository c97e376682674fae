//! `std::ops` implementations for `&Value`.
//!
//! Owned values and references mix freely: `a + b`, `&a + b` and `&a + &b` build the same
//! node. Owned operands are handles, so consuming them only drops a reference count; use
//! `&a` to keep `a` usable afterwards. A literal on either side is wrapped into a leaf, so
//! `x * 2.0` and `2.0 * &x` build the same graph shape as `x.mul(&Value::new(2.0))`.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &Value::new(rhs))
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::new(self), rhs)
            }
        }

        // --- Owned operands ---
        impl $trait<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &Value::new(rhs))
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(self), &rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op);
impl_binary_operator!(Sub, sub, sub_op);
impl_binary_operator!(Mul, mul, mul_op);
impl_binary_operator!(Div, div, div_op);

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(&self)
    }
}

#[cfg(test)]
mod tests {
    use crate::autograd::Op;
    use crate::value::Value;
    use approx::assert_relative_eq;

    #[test]
    fn test_operators_forward() {
        let a = Value::new(6.0);
        let b = Value::new(3.0);
        assert_relative_eq!((&a + &b).data(), 9.0);
        assert_relative_eq!((&a - &b).data(), 3.0);
        assert_relative_eq!((&a * &b).data(), 18.0);
        assert_relative_eq!((&a / &b).data(), 2.0);
        assert_relative_eq!((-&a).data(), -6.0);
    }

    #[test]
    fn test_literal_on_either_side() {
        let x = Value::new(4.0);
        let left = 2.0 + &x;
        let right = &x + 2.0;
        assert_relative_eq!(left.data(), right.data());
        assert_eq!(left.op(), Op::Add);
        assert!(left.operands()[0].is_leaf());
        assert!(left.operands()[1].ptr_eq(&x));
        assert!(right.operands()[0].ptr_eq(&x));

        assert_relative_eq!((1.0 - &x).data(), -3.0);
        assert_relative_eq!((&x - 1.0).data(), 3.0);
        assert_relative_eq!((8.0 / &x).data(), 2.0);
        assert_relative_eq!((&x / 8.0).data(), 0.5);
        assert_relative_eq!((3.0 * &x).data(), 12.0);
    }

    #[test]
    fn test_owned_operands() {
        let a = Value::new(6.0);
        let b = Value::new(3.0);
        let keep_a = a.clone();
        let keep_b = b.clone();

        let sum = a.clone() + b.clone();
        assert_relative_eq!(sum.data(), 9.0);
        assert!(sum.operands()[0].ptr_eq(&keep_a));
        assert!(sum.operands()[1].ptr_eq(&keep_b));

        assert_relative_eq!((a.clone() - &b).data(), 3.0);
        assert_relative_eq!((&a * b.clone()).data(), 18.0);
        assert_relative_eq!((a.clone() / 2.0).data(), 3.0);
        assert_relative_eq!((2.0 * b.clone()).data(), 6.0);
        assert_relative_eq!((-a.clone()).data(), -6.0);

        // Chained owned expression: f = (a + b) * a + 1
        let f = (a.clone() + b.clone()) * a + 1.0;
        assert_relative_eq!(f.data(), 55.0);
        f.backward();
        // df/da = 2a + b, df/db = a
        assert_relative_eq!(keep_a.grad(), 15.0);
        assert_relative_eq!(keep_b.grad(), 6.0);
    }

    #[test]
    fn test_operator_graph_matches_explicit_methods() {
        let x1 = Value::new(1.5);
        let y1 = Value::new(-0.5);
        let via_ops = &(&x1 * &y1) + 1.0;
        via_ops.backward();

        let x2 = Value::new(1.5);
        let y2 = Value::new(-0.5);
        let via_methods = x2.mul(&y2).add_scalar(1.0);
        via_methods.backward();

        assert_eq!(via_ops.data().to_bits(), via_methods.data().to_bits());
        assert_eq!(x1.grad().to_bits(), x2.grad().to_bits());
        assert_eq!(y1.grad().to_bits(), y2.grad().to_bits());
    }
}
