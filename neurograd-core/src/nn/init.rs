use crate::error::NeuroGradError;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Weight initialization scheme for neurons and layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Init {
    /// He/Kaiming uniform, suited to ReLU networks.
    #[default]
    KaimingUniform,
    /// Xavier/Glorot uniform, suited to tanh networks.
    XavierUniform,
    /// Xavier/Glorot normal.
    XavierNormal,
    Zeros,
}

impl Init {
    /// Draws one weight for a unit with `fan_in` inputs in a layer with `fan_out` outputs.
    pub fn sample<R: Rng + ?Sized>(
        self,
        fan_in: usize,
        fan_out: usize,
        rng: &mut R,
    ) -> Result<f64, NeuroGradError> {
        if fan_in == 0 {
            return Err(NeuroGradError::InvalidConfiguration(
                "weight initialization requires fan_in > 0".to_string(),
            ));
        }
        match self {
            Init::KaimingUniform => Ok(kaiming_uniform(fan_in, rng)),
            Init::XavierUniform => Ok(xavier_uniform(fan_in, fan_out, rng)),
            Init::XavierNormal => xavier_normal(fan_in, fan_out, rng),
            Init::Zeros => Ok(0.0),
        }
    }
}

/// Samples from `U(-a, a)` with `a = sqrt(6 / fan_in)`.
pub fn kaiming_uniform<R: Rng + ?Sized>(fan_in: usize, rng: &mut R) -> f64 {
    let bound = (6.0 / fan_in as f64).sqrt();
    rng.gen_range(-bound..=bound)
}

/// Samples from `U(-a, a)` with `a = sqrt(6 / (fan_in + fan_out))`.
pub fn xavier_uniform<R: Rng + ?Sized>(fan_in: usize, fan_out: usize, rng: &mut R) -> f64 {
    let bound = (6.0 / (fan_in + fan_out) as f64).sqrt();
    rng.gen_range(-bound..=bound)
}

/// Samples from `N(0, σ²)` with `σ = sqrt(2 / (fan_in + fan_out))`.
pub fn xavier_normal<R: Rng + ?Sized>(
    fan_in: usize,
    fan_out: usize,
    rng: &mut R,
) -> Result<f64, NeuroGradError> {
    let std_dev = (2.0 / (fan_in + fan_out) as f64).sqrt();
    let normal = Normal::new(0.0, std_dev)
        .map_err(|e| NeuroGradError::InvalidConfiguration(format!("xavier_normal: {}", e)))?;
    Ok(normal.sample(rng))
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
