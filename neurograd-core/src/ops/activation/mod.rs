// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear scalar activations. Each one is a single catalog operation with its own
//! backward rule, expressed in terms of the node's output:
//! - [`ReLU`](relu/fn.relu_op.html): `max(0, x)`, gradient 1 above 0 and 0 otherwise.
//! - [`Tanh`](tanh/fn.tanh_op.html): `tanh(x)`, gradient `1 - tanh(x)^2`.

pub mod relu;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use tanh::tanh_op;
