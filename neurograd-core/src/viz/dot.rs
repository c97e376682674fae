use crate::autograd::NodeId;
use crate::viz::trace::trace_graph;
use crate::value::Value;
use std::collections::HashMap;
use std::fmt::Write;

// Characters with a meaning inside a Graphviz record label.
fn escape_record(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>' | '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Renders the graph reachable from `root` as a Graphviz DOT document.
///
/// Each value becomes a `record` node `{ label | data | grad }`. Each non-leaf also gets a
/// small node showing its operation, with edges `operand -> op -> value`.
///
/// ```
/// use neurograd_core::{viz, Value};
///
/// let a = Value::with_label(2.0, "a");
/// let b = a.tanh();
/// let dot = viz::to_dot(&b);
/// assert!(dot.starts_with("digraph"));
/// assert!(dot.contains("tanh"));
/// ```
pub fn to_dot(root: &Value) -> String {
    let (nodes, edges) = trace_graph(root);
    let ids: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.node_id(), i))
        .collect();

    let mut dot = String::from("digraph {\n    rankdir=LR;\n");
    // Writing into a String cannot fail.
    for (i, node) in nodes.iter().enumerate() {
        let label = node.label().unwrap_or_default();
        let _ = writeln!(
            dot,
            "    n{} [shape=record, label=\"{{ {} | data {:.4} | grad {:.4} }}\"];",
            i,
            escape_record(&label),
            node.data(),
            node.grad()
        );
        if !node.is_leaf() {
            let _ = writeln!(dot, "    n{}_op [label=\"{}\"];", i, node.op().symbol());
            let _ = writeln!(dot, "    n{}_op -> n{};", i, i);
        }
    }
    for (operand, consumer) in &edges {
        let _ = writeln!(
            dot,
            "    n{} -> n{}_op;",
            ids[&operand.node_id()],
            ids[&consumer.node_id()]
        );
    }
    dot.push_str("}\n");
    dot
}
