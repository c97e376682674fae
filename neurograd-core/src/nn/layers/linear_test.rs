use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn inputs(values: &[f64]) -> Vec<Value> {
    values.iter().map(|&x| Value::new(x)).collect()
}

#[test]
fn test_linear_creation() -> Result<(), NeuroGradError> {
    let mut rng = StdRng::seed_from_u64(0);
    let layer = Linear::new(4, 3, Init::KaimingUniform, &mut rng)?;
    assert_eq!(layer.in_features(), 4);
    assert_eq!(layer.out_features(), 3);
    // (4 weights + 1 bias) per neuron
    assert_eq!(layer.num_parameters(), 15);
    Ok(())
}

#[test]
fn test_linear_forward_shape() -> Result<(), NeuroGradError> {
    let mut rng = StdRng::seed_from_u64(1);
    let layer = Linear::new(2, 5, Init::XavierUniform, &mut rng)?;
    let out = layer.forward(&inputs(&[0.5, -0.5]))?;
    assert_eq!(out.len(), 5);
    Ok(())
}

#[test]
fn test_linear_zero_init_outputs_zero() -> Result<(), NeuroGradError> {
    let mut rng = StdRng::seed_from_u64(1);
    let layer = Linear::new(3, 2, Init::Zeros, &mut rng)?;
    let out = layer.forward(&inputs(&[1.0, 2.0, 3.0]))?;
    for o in out {
        assert_relative_eq!(o.data(), 0.0);
    }
    Ok(())
}

#[test]
fn test_linear_backward_populates_all_parameters() -> Result<(), NeuroGradError> {
    let mut rng = StdRng::seed_from_u64(2);
    let layer = Linear::new(3, 2, Init::KaimingUniform, &mut rng)?;
    let x = inputs(&[1.0, -2.0, 0.5]);
    let out = layer.forward(&x)?;
    let total = &out[0] + &out[1];
    total.backward();

    for neuron in layer.neurons() {
        for (w, xi) in neuron.weights().iter().zip(&x) {
            assert_relative_eq!(w.grad(), xi.data());
        }
        assert_relative_eq!(neuron.bias().grad(), 1.0);
    }

    layer.zero_grad();
    assert!(layer.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_linear_input_size_mismatch() -> Result<(), NeuroGradError> {
    let mut rng = StdRng::seed_from_u64(3);
    let layer = Linear::new(3, 1, Init::KaimingUniform, &mut rng)?;
    let result = layer.forward(&inputs(&[1.0]));
    assert!(matches!(
        result,
        Err(NeuroGradError::InputSizeMismatch { expected: 3, actual: 1, .. })
    ));
    Ok(())
}

#[test]
fn test_linear_invalid_configuration() {
    let mut rng = StdRng::seed_from_u64(4);
    assert!(Linear::new(3, 0, Init::KaimingUniform, &mut rng).is_err());
    assert!(Linear::new(0, 2, Init::KaimingUniform, &mut rng).is_err());
}
