use crate::autograd::Op;
use thiserror::Error;

/// Custom error type for the NeuroGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuroGradError {
    #[error("Arity mismatch for operation {op:?}: expected {expected} operand(s), got {actual}")]
    ArityMismatch {
        op: Op,
        expected: usize,
        actual: usize,
    },

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    #[error("Input size mismatch in {context}: expected {expected}, got {actual}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    // Add more specific errors as needed
}
