use crate::autograd::graph::topological_sort;
use crate::error::NeuroGradError;
use crate::value::Value;
use log::{debug, trace};

impl Value {
    /// Adds `delta` to this node's gradient.
    ///
    /// This is the only way gradients grow: the backward pass never overwrites a gradient,
    /// so a node reached through several paths ends up with the sum of all contributions.
    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Resets this node's gradient to 0.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Local partial derivatives of this node with respect to each of its operands,
    /// evaluated at the forward values. Empty for leaves.
    pub(crate) fn local_gradients(&self) -> Result<Vec<f64>, NeuroGradError> {
        let guard = self.read_data();
        let inputs: Vec<f64> = guard.operands.iter().map(|v| v.data()).collect();
        guard.op.local_gradients(&inputs, guard.data)
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Computes d(self)/d(node) for every node reachable from `self` through operand
    /// edges. All reachable gradients are reset to 0, `self.grad` is seeded with 1.0, then
    /// nodes are visited in reverse topological order so that each node's gradient is
    /// final before it is pushed to its operands.
    ///
    /// Gradients left by an earlier call on an overlapping graph are discarded, not summed:
    /// to combine two losses, backward their sum.
    ///
    /// # Errors
    /// * `CycleDetected` if the operand edges form a cycle.
    /// * `ArityMismatch` if a node holds the wrong number of operands for its operation.
    pub fn try_backward(&self) -> Result<(), NeuroGradError> {
        let sorted_nodes = topological_sort(self)?;
        debug!(
            "backward: {} node(s) reachable from output {:?}",
            sorted_nodes.len(),
            self.node_id()
        );

        for node in &sorted_nodes {
            node.zero_grad();
        }
        self.accumulate_grad(1.0);

        for node in &sorted_nodes {
            if node.is_leaf() {
                continue;
            }
            let upstream = node.grad();
            let local_grads = node.local_gradients()?;
            trace!(
                "backward: {:?} node {:?} grad={} local={:?}",
                node.op(),
                node.node_id(),
                upstream,
                local_grads
            );
            for (operand, local) in node.operands().iter().zip(local_grads) {
                operand.accumulate_grad(upstream * local);
            }
        }
        Ok(())
    }

    /// Performs the backward pass, panicking on a malformed graph.
    ///
    /// Graphs built through the public operators are always well-formed; see
    /// [`Value::try_backward`] for the fallible version.
    pub fn backward(&self) {
        self.try_backward()
            .unwrap_or_else(|e| panic!("Backward pass failed: {}", e))
    }
}
