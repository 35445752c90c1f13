//! Pseudo-force layout
//!
//! Explicitly NOT a physics simulation: nodes land on a fixed grid by
//! insertion index, with bounded random jitter so overlapping rows read
//! as a scatter. Reproducibility depends entirely on the caller passing
//! a seed - an unseeded call draws OS entropy and will differ between
//! runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lineagraph_core::EngineConfig;
use lineagraph_graph::GraphModel;

use crate::{LayoutResult, Position};

/// Position all nodes on a jittered grid
pub fn layout(graph: &GraphModel, seed: Option<u64>, config: &EngineConfig) -> LayoutResult {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let columns = config.grid_columns.max(1);
    let jitter_bound = config.jitter_bound.max(f64::MIN_POSITIVE);
    let mut result = LayoutResult::with_capacity(graph.node_count());

    for (i, node) in graph.nodes().iter().enumerate() {
        let col = (i % columns) as f64;
        let row = (i / columns) as f64;
        let jitter_x: f64 = rng.gen_range(0.0..jitter_bound);
        let jitter_y: f64 = rng.gen_range(0.0..jitter_bound);
        result.insert(
            node.id.clone(),
            Position {
                x: col * config.grid_column_spacing + jitter_x,
                y: row * config.grid_row_spacing + jitter_y,
            },
        );
    }

    result
}
