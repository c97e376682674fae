use crate::error::NeuroGradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(NeuroGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(NeuroGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

fn leaves_from(inputs: &[f64]) -> Vec<Value> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| Value::with_label(x, format!("x{}", i)))
        .collect()
}

/// Checks analytical gradients against numerical gradients using central finite
/// differences.
///
/// `func` builds a scalar output from leaves created from `inputs`. It is called once for
/// the analytical pass (followed by `try_backward`) and twice per input for the numerical
/// estimate `(f(x + eps) - f(x - eps)) / 2eps`. Each pair is compared with
/// `approx::relative_eq!` using `tolerance` as both absolute and relative bound.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, NeuroGradError>,
{
    // --- 1. Analytical gradients ---
    let leaves = leaves_from(inputs);
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output
        .try_backward()
        .map_err(GradCheckError::BackwardPassError)?;

    // --- 2. Numerical gradients, one input at a time ---
    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let mut shifted = inputs.to_vec();
        shifted[input_index] = inputs[input_index] + epsilon;
        let loss_plus = func(&leaves_from(&shifted))
            .map_err(GradCheckError::ForwardPassError)?
            .data();
        shifted[input_index] = inputs[input_index] - epsilon;
        let loss_minus = func(&leaves_from(&shifted))
            .map_err(GradCheckError::ForwardPassError)?
            .data();

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}
