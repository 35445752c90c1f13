//! Graph positioning strategies
//!
//! Four interchangeable layouts over a built `GraphModel`. Every
//! strategy returns exactly one position per node, terminates on
//! cyclic input, and is a pure function of `(graph, algorithm, seed)`
//! - except the pseudo-force grid, whose determinism depends on the
//! caller supplying a seed (see `grid`).

pub mod circular;
pub mod grid;
pub mod hierarchical;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use lineagraph_core::{EngineConfig, LayoutAlgorithm};
use lineagraph_graph::GraphModel;

/// A 2D position in layout space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Node id -> position, covering every node in the graph exactly once
pub type LayoutResult = HashMap<String, Position>;

/// Position every node in the graph with the chosen strategy
///
/// Never fails on a valid graph: every algorithm has a finite result
/// for every input, including empty, single-node, disconnected, and
/// cyclic graphs.
pub fn layout(
    graph: &GraphModel,
    algorithm: LayoutAlgorithm,
    seed: Option<u64>,
    config: &EngineConfig,
) -> LayoutResult {
    match algorithm {
        LayoutAlgorithm::Hierarchical => hierarchical::layout(graph, config),
        LayoutAlgorithm::Force => grid::layout(graph, seed, config),
        LayoutAlgorithm::Circular => circular::layout(graph, config),
        LayoutAlgorithm::Tree => {
            // Tree is hierarchical with widened spacing
            let mut positions = hierarchical::layout(graph, config);
            for position in positions.values_mut() {
                position.x *= config.tree_scale_x;
                position.y *= config.tree_scale_y;
            }
            positions
        }
    }
}
