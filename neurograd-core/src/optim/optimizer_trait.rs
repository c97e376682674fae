use crate::error::NeuroGradError;
use crate::value::Value;

/// Trait defining the common interface for all optimizers.
pub trait Optimizer {
    /// Performs a single optimization step from the gradients currently stored on the
    /// parameters.
    fn step(&mut self) -> Result<(), NeuroGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// `Value::backward` already resets the nodes it reaches, so this mostly matters for
    /// parameters that were not part of the last graph.
    fn zero_grad(&mut self) {
        for p in self.params() {
            p.zero_grad();
        }
    }

    /// The parameters managed by the optimizer, in registration order.
    fn params(&self) -> &[Value];
}
