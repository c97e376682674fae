// src/value/debug.rs
use crate::value::Value;
use std::fmt;

// Manual implementation: deriving Debug would print the whole ancestor graph.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => write!(
                f,
                "Value(data={}, grad={}, op={:?}, label={:?}, operands={})",
                guard.data,
                guard.grad,
                guard.op,
                guard.label,
                guard.operands.len()
            ),
            Err(_) => write!(f, "Value(<mutably borrowed>)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        match guard.label.as_deref() {
            Some(label) => write!(f, "Value(data={}, label={})", guard.data, label),
            None => write!(f, "Value(data={})", guard.data),
        }
    }
}
