use crate::error::NeuroGradError;
use crate::nn::module::Module;
use crate::value::Value;

/// Applies [`Value::relu`] to every input. No parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReLU;

impl ReLU {
    pub fn new() -> Self {
        ReLU
    }
}

impl Module for ReLU {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NeuroGradError> {
        Ok(inputs.iter().map(Value::relu).collect())
    }

    fn parameters(&self) -> Vec<Value> {
        Vec::new()
    }
}

/// Applies [`Value::tanh`] to every input. No parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tanh;

impl Tanh {
    pub fn new() -> Self {
        Tanh
    }
}

impl Module for Tanh {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NeuroGradError> {
        Ok(inputs.iter().map(Value::tanh).collect())
    }

    fn parameters(&self) -> Vec<Value> {
        Vec::new()
    }
}
