// src/nn/layers/mod.rs
// Module pour les différentes couches (Neuron, Linear, activations)

pub mod activation;
pub mod linear;
pub mod neuron;

// Re-export key layer structs
pub use activation::{ReLU, Tanh};
pub use linear::Linear;
pub use neuron::Neuron;
