use crate::error::NeuroGradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A single linear unit: `sum(x_i * w_i) + b`.
///
/// No activation is applied; compose with [`ReLU`](super::ReLU) or [`Tanh`](super::Tanh).
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights drawn from `init` and a zero bias.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        Self::with_fan_out(n_inputs, 1, init, rng)
    }

    /// Same as [`Neuron::new`], with the fan-out of the enclosing layer for schemes that
    /// depend on it (Xavier).
    pub(crate) fn with_fan_out<R: Rng + ?Sized>(
        n_inputs: usize,
        fan_out: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        if n_inputs == 0 {
            return Err(NeuroGradError::InvalidConfiguration(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let mut weights = Vec::with_capacity(n_inputs);
        for i in 0..n_inputs {
            let w = init.sample(n_inputs, fan_out, rng)?;
            weights.push(Value::with_label(w, format!("w{}", i)));
        }
        Ok(Neuron {
            weights,
            bias: Value::with_label(0.0, "b"),
        })
    }

    /// Builds a neuron from explicit weights and bias.
    pub fn from_weights(weights: &[f64], bias: f64) -> Result<Self, NeuroGradError> {
        if weights.is_empty() {
            return Err(NeuroGradError::InvalidConfiguration(
                "a neuron needs at least one input".to_string(),
            ));
        }
        Ok(Neuron {
            weights: weights
                .iter()
                .enumerate()
                .map(|(i, &w)| Value::with_label(w, format!("w{}", i)))
                .collect(),
            bias: Value::with_label(bias, "b"),
        })
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Computes the neuron's single output.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, NeuroGradError> {
        if inputs.len() != self.weights.len() {
            return Err(NeuroGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                context: "Neuron::forward".to_string(),
            });
        }
        let weighted_sum = inputs
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .reduce(|acc, term| &acc + &term)
            .ok_or_else(|| NeuroGradError::EmptyInput("Neuron::forward".to_string()))?;
        Ok(&weighted_sum + &self.bias)
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NeuroGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_neuron_forward() -> Result<(), NeuroGradError> {
        let neuron = Neuron::from_weights(&[0.5, -1.0, 2.0], 0.25)?;
        let inputs: Vec<Value> = [1.0, 2.0, 3.0].iter().map(|&x| Value::new(x)).collect();
        let out = neuron.activate(&inputs)?;
        // 0.5 - 2.0 + 6.0 + 0.25
        assert_relative_eq!(out.data(), 4.75);
        Ok(())
    }

    #[test]
    fn test_neuron_backward_reaches_parameters() -> Result<(), NeuroGradError> {
        let neuron = Neuron::from_weights(&[0.5, -1.0], 0.0)?;
        let inputs = vec![Value::new(3.0), Value::new(-2.0)];
        let out = neuron.activate(&inputs)?;
        out.backward();
        assert_relative_eq!(neuron.weights()[0].grad(), 3.0);
        assert_relative_eq!(neuron.weights()[1].grad(), -2.0);
        assert_relative_eq!(neuron.bias().grad(), 1.0);
        assert_relative_eq!(inputs[0].grad(), 0.5);
        Ok(())
    }

    #[test]
    fn test_neuron_input_size_mismatch() -> Result<(), NeuroGradError> {
        let neuron = Neuron::from_weights(&[1.0, 1.0], 0.0)?;
        let err = neuron.forward(&[Value::new(1.0)]).unwrap_err();
        assert!(matches!(
            err,
            NeuroGradError::InputSizeMismatch { expected: 2, actual: 1, .. }
        ));
        Ok(())
    }

    #[test]
    fn test_neuron_parameters_and_labels() -> Result<(), NeuroGradError> {
        let mut rng = StdRng::seed_from_u64(3);
        let neuron = Neuron::new(4, Init::KaimingUniform, &mut rng)?;
        let params = neuron.parameters();
        assert_eq!(params.len(), 5);
        assert_eq!(params[0].label().as_deref(), Some("w0"));
        assert_eq!(params[4].label().as_deref(), Some("b"));
        assert_eq!(neuron.bias().data(), 0.0);
        assert!(params.iter().all(|p| p.is_leaf()));
        Ok(())
    }

    #[test]
    fn test_neuron_rejects_zero_inputs() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(Neuron::new(0, Init::Zeros, &mut rng).is_err());
        assert!(Neuron::from_weights(&[], 1.0).is_err());
    }
}
