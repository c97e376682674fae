// examples/train_mlp.rs
//!
//! Trains a 4 -> 20 -> 20 -> 1 MLP (ReLU, ReLU, Tanh) with SGD on a four-sample toy
//! dataset, then prints the Graphviz DOT of a tiny expression graph.
//!
//! Run with `RUST_LOG=debug` to see the engine's own log output.

use neurograd_core::{
    nn::{init::Init, Linear, MSELoss, Module, ReLU, Reduction, Sequential, Tanh},
    optim::{Optimizer, SgdConfig, SgdOptimizer},
    viz, Value,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;

fn build_model(rng: &mut StdRng) -> Result<Sequential, Box<dyn Error>> {
    Ok(Sequential::new()
        .add(Linear::new(4, 20, Init::KaimingUniform, rng)?)
        .add(ReLU)
        .add(Linear::new(20, 20, Init::KaimingUniform, rng)?)
        .add(ReLU)
        .add(Linear::new(20, 1, Init::KaimingUniform, rng)?)
        .add(Tanh))
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::builder().is_test(false).try_init();

    let xs: [[f64; 4]; 4] = [
        [1.123, 0.01123, -12.123, 3.0],
        [-3.0, -5.1, 0.12, 1.0],
        [-13.0, 1.0, 10.534, 123.12],
        [1.0, 1.0, 1.0, 1.0],
    ];
    let ys = [1.0, 0.0, 0.0, 1.0];

    let mut rng = StdRng::seed_from_u64(42);
    let model = build_model(&mut rng)?;
    println!(
        "Model created: {} parameters across {} modules.",
        model.num_parameters(),
        model.len()
    );

    let mut optimizer = SgdOptimizer::new(
        model.parameters(),
        SgdConfig {
            lr: 0.01,
            momentum: 0.9,
            ..Default::default()
        },
    )?;
    let criterion = MSELoss::new(Reduction::Mean);
    let targets: Vec<Value> = ys.iter().map(|&y| Value::new(y)).collect();

    let epochs = 50;
    println!("\nStarting training loop...");
    for epoch in 0..epochs {
        optimizer.zero_grad();

        let mut predictions = Vec::with_capacity(xs.len());
        for x in &xs {
            let inputs: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
            predictions.extend(model.forward(&inputs)?);
        }

        let loss = criterion.calculate(&predictions, &targets)?;
        loss.try_backward()?;
        optimizer.step()?;

        if epoch % 5 == 0 || epoch == epochs - 1 {
            println!("Epoch [{}/{}], Loss: {:.4}", epoch + 1, epochs, loss.data());
        }
    }
    println!("Training finished.");

    let mut predictions = Vec::with_capacity(xs.len());
    for x in &xs {
        let inputs: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
        predictions.extend(model.forward(&inputs)?);
    }
    for (p, y) in predictions.iter().zip(ys) {
        println!("  prediction {:+.4}  target {}", p.data(), y);
    }

    // A small graph to look at: paste the output into any Graphviz viewer.
    let a = Value::with_label(2.0, "a");
    let b = Value::with_label(-3.0, "b");
    let c = Value::with_label(10.0, "c");
    let e = &a * &b;
    e.set_label("e");
    let d = &e + &c;
    d.set_label("d");
    let l = d.tanh();
    l.set_label("L");
    l.backward();
    println!("\n{}", viz::to_dot(&l));

    Ok(())
}
