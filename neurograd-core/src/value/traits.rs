use crate::value::Value;
use std::hash::{Hash, Hasher};

/// Equality is node identity, not numeric equality: two leaves holding the same number
/// are different nodes of the graph. Compare `data()` for numeric equality.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

/// Wraps a literal into a leaf node.
impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}
