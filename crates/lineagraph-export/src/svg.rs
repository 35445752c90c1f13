//! SVG export
//!
//! A standalone image: edges with arrowhead markers underneath, then
//! one shape per node keyed by its type, each with a centered label.
//! Element order follows insertion order, so output is deterministic.

use lineagraph_core::{EngineConfig, NodeType};
use lineagraph_graph::GraphModel;
use lineagraph_layout::{LayoutResult, Position};

const NODE_WIDTH: f64 = 120.0;
const NODE_HEIGHT: f64 = 40.0;

/// Render a positioned graph as SVG text
pub fn to_svg(graph: &GraphModel, layout: &LayoutResult, config: &EngineConfig) -> String {
    let (min, max) = bounding_box(layout);
    let pad = config.svg_padding;
    let view_x = min.x - pad - NODE_WIDTH / 2.0;
    let view_y = min.y - pad - NODE_HEIGHT / 2.0;
    let view_w = (max.x - min.x) + 2.0 * pad + NODE_WIDTH;
    let view_h = (max.y - min.y) + 2.0 * pad + NODE_HEIGHT;

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        fmt(view_x),
        fmt(view_y),
        fmt(view_w),
        fmt(view_h)
    ));
    out.push_str(
        "  <defs>\n    <marker id=\"arrow\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" \
         markerWidth=\"6\" markerHeight=\"6\" orient=\"auto-start-reverse\">\n      \
         <path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"#888888\"/>\n    </marker>\n  </defs>\n",
    );

    for edge in graph.edges() {
        let (Some(from), Some(to)) = (layout.get(&edge.source), layout.get(&edge.target)) else {
            continue;
        };
        out.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#888888\" \
             marker-end=\"url(#arrow)\"/>\n",
            fmt(from.x),
            fmt(from.y),
            fmt(to.x),
            fmt(to.y)
        ));
    }

    for node in graph.nodes() {
        let Some(position) = layout.get(&node.id) else {
            continue;
        };
        out.push_str(&shape(node.node_type, position));
        out.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
             font-size=\"12\">{}</text>\n",
            fmt(position.x),
            fmt(position.y),
            escape(&node.name)
        ));
    }

    out.push_str("</svg>\n");
    out
}

/// Shape element for a node, keyed by type
///
/// Metrics and dimensions render as ellipses, everything else as
/// rectangles; each type keeps a fixed fill.
fn shape(node_type: NodeType, position: &Position) -> String {
    let fill = fill_color(node_type);
    match node_type {
        NodeType::Metric | NodeType::Dimension => format!(
            "  <ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" fill=\"{}\" stroke=\"#333333\"/>\n",
            fmt(position.x),
            fmt(position.y),
            fmt(NODE_WIDTH / 2.0),
            fmt(NODE_HEIGHT / 2.0),
            fill
        ),
        _ => format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"#333333\"/>\n",
            fmt(position.x - NODE_WIDTH / 2.0),
            fmt(position.y - NODE_HEIGHT / 2.0),
            fmt(NODE_WIDTH),
            fmt(NODE_HEIGHT),
            fill
        ),
    }
}

fn fill_color(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Table => "#4e79a7",
        NodeType::View => "#59a14f",
        NodeType::Model => "#f28e2b",
        NodeType::Metric => "#e15759",
        NodeType::Dimension => "#b07aa1",
        NodeType::Column => "#9c755f",
        NodeType::File => "#edc948",
        NodeType::External => "#bab0ac",
    }
}

/// Bounding box over all positions; the origin for an empty layout
fn bounding_box(layout: &LayoutResult) -> (Position, Position) {
    let mut min = Position { x: f64::MAX, y: f64::MAX };
    let mut max = Position { x: f64::MIN, y: f64::MIN };

    for position in layout.values() {
        min.x = min.x.min(position.x);
        min.y = min.y.min(position.y);
        max.x = max.x.max(position.x);
        max.y = max.y.max(position.y);
    }

    if layout.is_empty() {
        let origin = Position { x: 0.0, y: 0.0 };
        return (origin, origin);
    }
    (min, max)
}

/// Trim trailing `.0` so coordinates read cleanly
fn fmt(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Escape XML text content
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
