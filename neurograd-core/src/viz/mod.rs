//! Read-only graph inspection: node/edge tracing and Graphviz DOT export.
//!
//! Nothing here touches `data` or `grad`; the output reflects the graph as it is when
//! called, so tracing after `backward` shows the gradients.

pub mod dot;
pub mod trace;

pub use dot::to_dot;
pub use trace::trace_graph;
