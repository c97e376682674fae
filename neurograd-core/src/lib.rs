//! # neurograd-core
//!
//! A scalar reverse-mode automatic differentiation engine, plus the minimal neural network
//! pieces (neurons, layers, losses, SGD) needed to train a small MLP on top of it.
//!
//! ```
//! use neurograd_core::Value;
//!
//! let a = Value::with_label(1.0, "a");
//! let b = Value::with_label(2.0, "b");
//! let c = Value::with_label(-2.0, "c");
//! let d = Value::with_label(19.0, "d");
//! let e = &a + &b;
//! let f = &(&e * &c) + &d;
//! assert_eq!(f.data(), 17.0);
//!
//! f.backward();
//! assert_eq!(a.grad(), -2.0);
//! assert_eq!(c.grad(), 3.0);
//! ```

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod nn;
pub mod optim;
pub mod viz;

pub mod error;

// Ré-exporte les types principaux pour `neurograd_core::Value`, etc.
pub use autograd::Op;
pub use error::NeuroGradError;
pub use value::Value;
