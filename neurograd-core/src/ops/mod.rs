//! # Scalar Operations Module (`ops`)
//!
//! The operator overlay: every function here builds a *new* [`Value`](crate::Value) node
//! from existing ones, evaluating its forward formula immediately and recording its
//! operands and [`Op`](crate::Op) tag for the backward pass.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a free function (`add_op`, `relu_op`, ...)
//!   and matching methods on `Value` (`add`, `add_scalar`, `relu`, ...). The `_scalar`
//!   forms wrap a literal into a leaf first.
//! - **Derived operations:** `neg`, `sub` and `div` have no tag of their own; they are built
//!   from `Mul`, `Add` and `Pow` nodes, so they need no backward rule either.
//! - **Operators:** [`overloads`] implements `+ - * /` and unary `-` on `&Value` (and `f64`
//!   on either side) in terms of the same functions.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow and the derived neg, sub, div.
//! - [`activation`]: relu, tanh.
//! - [`math_elem`]: exp.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod overloads;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;
