// neurograd-core/src/nn/losses/mse.rs

use crate::error::NeuroGradError;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the per-element losses: 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = NeuroGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(NeuroGradError::InvalidConfiguration(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean Squared Error between `predictions` and `targets`.
///
/// The loss is built from `sub`, `powf` and `add` nodes, so calling `backward` on it
/// populates the gradients of everything the predictions were computed from.
///
/// # Errors
/// * `InputSizeMismatch` if the slices have different lengths.
/// * `EmptyInput` if they are empty.
pub fn mse_loss(
    predictions: &[Value],
    targets: &[Value],
    reduction: Reduction,
) -> Result<Value, NeuroGradError> {
    if predictions.len() != targets.len() {
        return Err(NeuroGradError::InputSizeMismatch {
            expected: predictions.len(),
            actual: targets.len(),
            context: "mse_loss targets".to_string(),
        });
    }
    let total = predictions
        .iter()
        .zip(targets)
        .map(|(p, t)| (p - t).powf(2.0))
        .reduce(|acc, term| &acc + &term)
        .ok_or_else(|| NeuroGradError::EmptyInput("mse_loss over zero predictions".to_string()))?;

    Ok(match reduction {
        Reduction::Sum => total,
        Reduction::Mean => total.div_scalar(predictions.len() as f64),
    })
}

/// Computes the Mean Squared Error (MSE) loss between predictions and targets.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub fn calculate(&self, predictions: &[Value], targets: &[Value]) -> Result<Value, NeuroGradError> {
        mse_loss(predictions, targets, self.reduction)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
