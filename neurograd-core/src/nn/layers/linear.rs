use crate::error::NeuroGradError;
use crate::nn::init::Init;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use log::debug;
use rand::Rng;

/// A fully connected layer: `out_features` independent neurons over the same inputs.
#[derive(Debug, Clone)]
pub struct Linear {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Linear {
    /// Creates a new Linear layer.
    ///
    /// # Arguments
    ///
    /// * `in_features` - Number of inputs of each neuron.
    /// * `out_features` - Number of neurons (outputs).
    /// * `init` - Weight initialization scheme. Biases start at 0.
    /// * `rng` - Source of randomness, seed it for reproducible weights.
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        if out_features == 0 {
            return Err(NeuroGradError::InvalidConfiguration(
                "Linear layer needs at least one output".to_string(),
            ));
        }
        let mut neurons = Vec::with_capacity(out_features);
        for _ in 0..out_features {
            neurons.push(Neuron::with_fan_out(in_features, out_features, init, rng)?);
        }
        debug!(
            "Linear layer created: {} -> {} ({:?})",
            in_features, out_features, init
        );
        Ok(Linear {
            neurons,
            in_features,
        })
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Linear {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NeuroGradError> {
        if inputs.len() != self.in_features {
            return Err(NeuroGradError::InputSizeMismatch {
                expected: self.in_features,
                actual: inputs.len(),
                context: "Linear::forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
