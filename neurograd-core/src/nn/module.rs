use crate::error::NeuroGradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, containers).
///
/// A module maps a slice of input values to a vector of output values, and owns a set of
/// learnable parameters: leaf values that an optimizer updates between forward passes.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, building new graph nodes on top of `inputs` and the
    /// module's parameters.
    ///
    /// # Errors
    /// Returns `NeuroGradError::InputSizeMismatch` if `inputs` does not have the length the
    /// module expects.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NeuroGradError>;

    /// Returns handles to all learnable parameters, including those of sub-modules.
    /// Modules without parameters return an empty vector.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient of every parameter to 0.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Returns the direct child modules. Empty for modules that hold no sub-modules.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }
}
