// Elementary math functions on scalar values.
pub mod exp;

pub use exp::exp_op;
