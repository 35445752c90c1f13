//! JSON export (stable exchange format)
//!
//! The document re-parses into an equivalent graph and layout: same
//! node-id set, same edge-id set, same positions. Nodes and edges are
//! emitted in insertion order.

use serde::{Deserialize, Serialize};

use lineagraph_core::{Edge, GraphError, Node};
use lineagraph_graph::{BuildOptions, GraphBuild, GraphModel};
use lineagraph_layout::{LayoutResult, Position};

/// A node together with its layout position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNode {
    /// Original node fields, flattened
    #[serde(flatten)]
    pub node: Node,

    /// Position assigned by the layout engine
    pub position: Position,
}

/// The full exchange document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Nodes in insertion order, with positions
    pub nodes: Vec<ExportNode>,

    /// Edges in insertion order
    pub edges: Vec<Edge>,
}

/// Errors from re-parsing an exported document
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid export JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export does not describe a valid graph: {0}")]
    Graph(#[from] GraphError),
}

/// Serialize a positioned graph into the exchange document
///
/// A node the layout somehow missed falls back to the origin rather
/// than failing; the layout contract makes that unreachable for
/// engine-produced layouts.
pub fn to_json(graph: &GraphModel, layout: &LayoutResult) -> ExportDocument {
    let nodes = graph
        .nodes()
        .iter()
        .map(|node| ExportNode {
            node: node.clone(),
            position: layout
                .get(&node.id)
                .copied()
                .unwrap_or(Position { x: 0.0, y: 0.0 }),
        })
        .collect();

    ExportDocument {
        nodes,
        edges: graph.edges().to_vec(),
    }
}

/// Serialize straight to pretty-printed JSON text
pub fn to_json_string(graph: &GraphModel, layout: &LayoutResult) -> String {
    // ExportDocument contains nothing a serializer can reject
    serde_json::to_string_pretty(&to_json(graph, layout))
        .unwrap_or_else(|_| String::from("{}"))
}

/// Re-parse an exported document into a graph and layout
///
/// Rebuilds in strict mode: an export produced by `to_json` has no
/// dangling edges, so any dangling reference means the document was
/// edited or truncated.
pub fn from_json(text: &str) -> Result<(GraphBuild, LayoutResult), ParseError> {
    let document: ExportDocument = serde_json::from_str(text)?;

    let mut layout = LayoutResult::with_capacity(document.nodes.len());
    let mut nodes = Vec::with_capacity(document.nodes.len());
    for export_node in document.nodes {
        layout.insert(export_node.node.id.clone(), export_node.position);
        nodes.push(export_node.node);
    }

    let build = GraphModel::build(nodes, document.edges, BuildOptions { strict: true })?;
    Ok((build, layout))
}
