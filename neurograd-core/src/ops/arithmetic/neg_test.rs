use super::*;
use crate::autograd::Op;
use approx::assert_relative_eq;

#[test]
fn test_neg_forward() {
    let a = Value::new(2.5);
    let b = neg_op(&a);
    assert_relative_eq!(b.data(), -2.5);
    // No dedicated tag: negation is a product with a -1 leaf.
    assert_eq!(b.op(), Op::Mul);
    assert_relative_eq!(b.operands()[1].data(), -1.0);
}

#[test]
fn test_neg_backward() {
    let a = Value::new(2.5);
    let b = a.neg();
    b.backward();
    assert_relative_eq!(a.grad(), -1.0);
}

#[test]
fn test_double_neg() {
    let a = Value::new(-3.0);
    let b = a.neg().neg();
    assert_relative_eq!(b.data(), -3.0);
    b.backward();
    assert_relative_eq!(a.grad(), 1.0);
}
