//! # Autograd
//!
//! The differentiation machinery: the closed catalog of operations with their forward
//! formulas and local backward rules ([`op`]), the reverse topological ordering used by
//! the backward pass ([`graph`]), and a finite-difference gradient checker
//! ([`grad_check`]). The backward pass itself is [`Value::backward`](crate::Value::backward).

pub mod grad_check;
pub mod graph;
pub mod op;

pub use graph::{topological_sort, NodeId};
pub use op::Op;
