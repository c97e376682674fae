// neurograd-core/src/optim/mod.rs

//! Optimizers for training networks built from [`Value`](crate::Value) parameters.
//!
//! An optimizer owns handles to the leaves it updates. Since handles share their node,
//! `step` writes through to the same parameters the model reads in its next forward pass.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::{SgdConfig, SgdOptimizer};
