use crate::autograd::NodeId;
use crate::value::Value;
use std::collections::HashSet;

/// Collects every node reachable from `root` and every `(operand, consumer)` edge.
///
/// Nodes are listed once, in depth-first discovery order starting with `root`. An operand
/// used twice by the same consumer (`x * x`) yields a single edge. The order only depends on
/// the graph's shape, so two identical graphs trace identically.
pub fn trace_graph(root: &Value) -> (Vec<Value>, Vec<(Value, Value)>) {
    let mut nodes: Vec<Value> = Vec::new();
    let mut edges: Vec<(Value, Value)> = Vec::new();
    let mut seen_nodes: HashSet<NodeId> = HashSet::new();
    let mut seen_edges: HashSet<(NodeId, NodeId)> = HashSet::new();

    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if !seen_nodes.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        for operand in &operands {
            if seen_edges.insert((operand.node_id(), node.node_id())) {
                edges.push((operand.clone(), node.clone()));
            }
        }
        stack.extend(operands.into_iter().rev());
        nodes.push(node);
    }

    (nodes, edges)
}
