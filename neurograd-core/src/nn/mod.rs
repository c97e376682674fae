// src/nn/mod.rs
// Module principal pour les couches de réseau de neurones, les conteneurs, etc.

//! # Neural network building blocks
//!
//! Scalar neurons, layers and containers built on [`Value`](crate::Value). Every module
//! builds a fresh graph on each `forward` call; parameters are leaf values that survive
//! across calls and are updated in place by an optimizer.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod sequential;

// Re-export common items
pub use init::Init;
pub use layers::{Linear, Neuron, ReLU, Tanh};
pub use losses::{mse_loss, MSELoss, Reduction};
pub use module::Module;
pub use sequential::Sequential;
