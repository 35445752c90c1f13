//! Graphviz DOT export
//!
//! One node statement per node, then one edge statement per edge, both
//! in insertion order, so repeated calls on the same graph produce
//! byte-identical text.

use lineagraph_graph::GraphModel;

/// Render the graph as a Graphviz `digraph`
pub fn to_dot(graph: &GraphModel) -> String {
    let mut out = String::from("digraph lineage {\n");

    for node in graph.nodes() {
        out.push_str(&format!(
            "  \"{}\" [label=\"{}\"];\n",
            escape(&node.id),
            escape(&node.name)
        ));
    }

    for edge in graph.edges() {
        out.push_str(&format!(
            "  \"{}\" -> \"{}\" [label=\"{}\"];\n",
            escape(&edge.source),
            escape(&edge.target),
            escape(&edge.relation)
        ));
    }

    out.push_str("}\n");
    out
}

/// Backslash-escape quotes (and backslashes) for DOT string literals
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
