use crate::error::NeuroGradError;
use crate::value::Value;
use crate::value_data::ValueData;
use log::trace;
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a graph node: the address of its shared `RefCell<ValueData>`.
/// Stable for as long as any `Value` handle to the node is alive.
pub type NodeId = *const RefCell<ValueData>;

/// Builds a reverse topological order of the graph reachable from `root`.
///
/// The result starts with `root` and lists every reachable node exactly once, each node
/// after all of its consumers. It is a depth-first post-order over operand edges, reversed.
/// The traversal uses an explicit stack, so deep graphs (long training chains) do not
/// overflow the call stack.
///
/// # Errors
/// Returns `NeuroGradError::CycleDetected` if a node is reached again while it is still on
/// the current DFS path.
pub fn topological_sort(root: &Value) -> Result<Vec<Value>, NeuroGradError> {
    let mut finished: HashSet<NodeId> = HashSet::new();
    let mut on_path: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();

    // (node, operands_pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, operands_pushed)) = stack.pop() {
        let node_id = node.node_id();

        if operands_pushed {
            // Every operand of `node` is finished: post-order position reached.
            on_path.remove(&node_id);
            finished.insert(node_id);
            sorted_list.push(node);
            continue;
        }

        if finished.contains(&node_id) {
            trace!("[topological_sort] Node {:?} already visited.", node_id);
            continue;
        }
        if !on_path.insert(node_id) {
            return Err(NeuroGradError::CycleDetected);
        }

        let operands = node.operands();
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for operand in operands.into_iter().rev() {
            if !finished.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    sorted_list.reverse();
    Ok(sorted_list)
}
