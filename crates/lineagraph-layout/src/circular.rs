//! Circular layout
//!
//! Nodes on a single ring in insertion order. The radius grows with
//! node count so labels stay legible on large graphs.

use lineagraph_core::EngineConfig;
use lineagraph_graph::GraphModel;

use crate::{LayoutResult, Position};

/// Position all nodes evenly around a circle
pub fn layout(graph: &GraphModel, config: &EngineConfig) -> LayoutResult {
    let n = graph.node_count();
    let mut result = LayoutResult::with_capacity(n);
    if n == 0 {
        return result;
    }

    let radius = config
        .circular_min_radius
        .max(n as f64 * config.circular_radius_per_node);
    let step = std::f64::consts::TAU / n as f64;

    for (i, node) in graph.nodes().iter().enumerate() {
        let angle = i as f64 * step;
        result.insert(
            node.id.clone(),
            Position {
                x: radius * angle.cos(),
                y: radius * angle.sin(),
            },
        );
    }

    result
}
