use crate::error::NeuroGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;
use log::{debug, warn};

/// Hyperparameters of [`SgdOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgdConfig {
    pub lr: f64,
    pub momentum: f64,
    pub weight_decay: f64,
    pub nesterov: bool,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig {
            lr: 0.01,
            momentum: 0.0,
            weight_decay: 0.0,
            nesterov: false,
        }
    }
}

impl SgdConfig {
    pub fn with_lr(lr: f64) -> Self {
        SgdConfig {
            lr,
            ..Default::default()
        }
    }

    fn validate(&self) -> Result<(), NeuroGradError> {
        if !(self.lr >= 0.0) {
            return Err(NeuroGradError::InvalidConfiguration(format!(
                "Invalid learning rate: {}",
                self.lr
            )));
        }
        if !(self.momentum >= 0.0) {
            return Err(NeuroGradError::InvalidConfiguration(format!(
                "Invalid momentum value: {}",
                self.momentum
            )));
        }
        if !(self.weight_decay >= 0.0) {
            return Err(NeuroGradError::InvalidConfiguration(format!(
                "Invalid weight_decay value: {}",
                self.weight_decay
            )));
        }
        if self.nesterov && self.momentum == 0.0 {
            return Err(NeuroGradError::InvalidConfiguration(
                "Nesterov momentum requires a momentum > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum, weight decay, and Nesterov momentum. For each parameter `p` with
/// gradient `g`:
///
/// ```text
/// d = g + weight_decay * p
/// buf = momentum * buf + d            (if momentum > 0)
/// d = nesterov ? d + momentum * buf : buf
/// p = p - lr * d
/// ```
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    config: SgdConfig,
    // One buffer per parameter, same order as `params`. Empty until the first step.
    momentum_buffers: Vec<f64>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer` over `params`.
    ///
    /// # Errors
    /// `InvalidConfiguration` for a negative learning rate, momentum or weight decay, or
    /// Nesterov without momentum.
    pub fn new(
        params: impl IntoIterator<Item = Value>,
        config: SgdConfig,
    ) -> Result<Self, NeuroGradError> {
        config.validate()?;
        let params: Vec<Value> = params.into_iter().collect();
        debug!(
            "SGD optimizer over {} parameters: {:?}",
            params.len(),
            config
        );
        Ok(SgdOptimizer {
            params,
            config,
            momentum_buffers: Vec::new(),
        })
    }

    pub fn config(&self) -> &SgdConfig {
        &self.config
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<(), NeuroGradError> {
        let config = SgdConfig { lr, ..self.config };
        config.validate()?;
        self.config = config;
        Ok(())
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), NeuroGradError> {
        let SgdConfig {
            lr,
            momentum,
            weight_decay,
            nesterov,
        } = self.config;

        debug!("SGD step over {} parameters (lr={})", self.params.len(), lr);
        if momentum != 0.0 && self.momentum_buffers.len() != self.params.len() {
            self.momentum_buffers = vec![0.0; self.params.len()];
        }

        for (i, param) in self.params.iter().enumerate() {
            let grad = param.grad();
            if !grad.is_finite() {
                warn!(
                    "Skipping SGD update for parameter {} with non-finite gradient {}",
                    i, grad
                );
                continue;
            }

            let value = param.data();
            let mut d_p = grad;
            if weight_decay != 0.0 {
                d_p += weight_decay * value;
            }

            if momentum != 0.0 {
                let buffer = &mut self.momentum_buffers[i];
                *buffer = momentum * *buffer + d_p;
                d_p = if nesterov {
                    d_p + momentum * *buffer
                } else {
                    *buffer
                };
            }

            param.set_data(value - lr * d_p);
        }
        Ok(())
    }

    fn params(&self) -> &[Value] {
        &self.params
    }
}
