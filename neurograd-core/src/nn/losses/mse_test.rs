use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

fn values(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

#[test]
fn test_reduction_from_str() {
    assert_eq!("mean".parse::<Reduction>().unwrap(), Reduction::Mean);
    assert_eq!("SUM".parse::<Reduction>().unwrap(), Reduction::Sum);
    assert!(matches!(
        "max".parse::<Reduction>(),
        Err(NeuroGradError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_mse_loss_forward_basic() -> Result<(), NeuroGradError> {
    let mse = MSELoss::new(Reduction::Mean);
    let loss = mse.calculate(&values(&[1.0, 2.0]), &values(&[1.5, 1.0]))?;
    // (0.25 + 1.0) / 2
    assert_relative_eq!(loss.data(), 0.625, epsilon = 1e-12);

    let sum = mse_loss(&values(&[1.0, 2.0]), &values(&[1.5, 1.0]), Reduction::Sum)?;
    assert_relative_eq!(sum.data(), 1.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_loss_backward() -> Result<(), NeuroGradError> {
    let preds = values(&[1.0, 2.0]);
    let targets = values(&[1.5, 1.0]);
    let loss = mse_loss(&preds, &targets, Reduction::Mean)?;
    loss.backward();
    // d/dp = 2 (p - t) / n
    assert_relative_eq!(preds[0].grad(), -0.5, epsilon = 1e-12);
    assert_relative_eq!(preds[1].grad(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(targets[0].grad(), 0.5, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_loss_mismatched_lengths() {
    let result = mse_loss(&values(&[1.0, 2.0]), &values(&[1.0, 2.0, 3.0]), Reduction::Mean);
    assert!(matches!(
        result,
        Err(NeuroGradError::InputSizeMismatch { expected: 2, actual: 3, .. })
    ));
}

#[test]
fn test_mse_loss_empty() {
    let result = mse_loss(&[], &[], Reduction::Sum);
    assert!(matches!(result, Err(NeuroGradError::EmptyInput(_))));
}

#[test]
fn test_mse_loss_grad_check() {
    let func = |x: &[Value]| mse_loss(&x[..2], &x[2..], Reduction::Mean);
    let result = check_grad(func, &[0.3, -1.2, 0.8, 0.1], 1e-6, 1e-5);
    assert!(result.is_ok(), "MSE grad check failed: {:?}", result.err());
}
