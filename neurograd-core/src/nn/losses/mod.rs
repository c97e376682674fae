// Loss functions built from differentiable scalar operations.
pub mod mse;

pub use mse::{mse_loss, MSELoss, Reduction};
