// src/value_data.rs
use crate::autograd::Op;
use crate::value::Value;
use std::rc::Rc;

/// Internal storage for a node of the computation graph.
///
/// This struct holds the forward-evaluated scalar, the gradient accumulated by the
/// last backward pass, and the record of which operation produced the node from which
/// operands. It is wrapped in `Rc<RefCell<ValueData>>` by the `Value` handle to allow
/// shared ownership (a node can be the operand of several consumers) and interior
/// mutability of `grad` during backward.
pub struct ValueData {
    /// Forward-evaluated value.
    pub(crate) data: f64,
    /// Gradient of the last backward output with respect to this node.
    /// Only ever changed through `Value::accumulate_grad` and `Value::zero_grad`.
    pub(crate) grad: f64,

    // --- Graph Metadata ---
    /// Operation that produced this node, `Op::None` for leaves.
    pub(crate) op: Op,
    /// Nodes consumed by `op`, in operand order. Never mutated after construction,
    /// which keeps the graph acyclic.
    pub(crate) operands: Vec<Value>,
    /// Optional diagnostic name.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Creates the storage for a leaf node (input, constant or parameter).
    pub fn leaf(data: f64, label: Option<String>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Op::None,
            operands: Vec::new(),
            label,
        }
    }

    /// Creates the storage for a node produced by `op`, with `data` already evaluated.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op,
            operands,
            label: None,
        }
    }
}

// Dropping a long chain of nodes recursively would recurse once per graph level.
// Unlink uniquely-owned operands iteratively instead.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(operand) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(operand.data) {
                let mut inner = cell.into_inner();
                pending.append(&mut inner.operands);
            }
        }
    }
}
