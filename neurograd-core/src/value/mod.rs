use crate::autograd::graph::NodeId;
use crate::autograd::Op;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

pub mod autograd_methods;
pub mod debug;
pub mod traits;


/// A scalar node of the computation graph.
///
/// `Value` is a cheap handle (`Rc<RefCell<ValueData>>`): cloning it shares the node, it
/// does not copy it. Every operator builds a *new* node whose operands are existing
/// handles, so the graph only grows forward and stays acyclic.
#[derive(Clone)]
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node with zero gradient.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(data, None))),
        }
    }

    /// Creates a labelled leaf node.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(data, Some(label.into())))),
        }
    }

    /// Builds the node produced by `op` over `operands`, evaluating its forward formula.
    ///
    /// # Panics
    /// Panics if `op` is `Op::None` or if the operand count does not match `op.arity()`.
    /// Both are programming errors in the operator overlay.
    pub(crate) fn from_op(op: Op, operands: Vec<Value>) -> Self {
        assert!(op != Op::None, "Leaf values must be created with Value::new");
        let inputs: Vec<f64> = operands.iter().map(|v| v.data()).collect();
        let data = op
            .forward(&inputs)
            .unwrap_or_else(|e| panic!("Failed to build {:?} node: {}", op, e));
        Value {
            data: Rc::new(RefCell::new(ValueData::from_op(data, op, operands))),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    // --- Accessors ---

    /// Forward-evaluated value of this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the value of a leaf (optimizer step).
    ///
    /// Changing the data of a non-leaf does not re-run its forward formula and leaves the
    /// graph inconsistent, so it is reported with a warning.
    pub fn set_data(&self, data: f64) {
        let mut guard = self.write_data();
        if guard.op != Op::None {
            log::warn!(
                "set_data called on a non-leaf {:?} node; consumers built from it keep the old value.",
                guard.op
            );
        }
        guard.data = data;
    }

    /// Gradient accumulated by the last backward pass.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Operation that produced this node (`Op::None` for leaves).
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Handles to the operands of this node, in operand order. Empty for leaves.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().operands.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().operands.is_empty()
    }

    /// Identity of the underlying node (pointer of the shared cell).
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}
