//! Hierarchical (layered) layout
//!
//! Assigns each node a level - its longest-path distance from a root -
//! and lays levels out as centered horizontal rows. Level assignment
//! is an iterative fixed-point relaxation with an explicit pass cap:
//! naive relaxation never converges on a cycle (each lap around the
//! cycle proposes higher levels forever), so the cap is what guarantees
//! termination on cyclic input.

use std::collections::{HashMap, HashSet};

use lineagraph_core::EngineConfig;
use lineagraph_graph::{Adjacency, GraphModel};

use crate::{LayoutResult, Position};

/// Position all nodes in centered rows by level
pub fn layout(graph: &GraphModel, config: &EngineConfig) -> LayoutResult {
    let levels = assign_levels(graph);

    // Group nodes by level, preserving insertion order within a row
    let mut rows: HashMap<u32, Vec<usize>> = HashMap::new();
    for i in 0..graph.node_count() {
        rows.entry(levels[i]).or_default().push(i);
    }

    let mut result = LayoutResult::with_capacity(graph.node_count());
    for (&level, row) in &rows {
        let width = config.node_width;
        let start_x = -(row.len() as f64) * width / 2.0;
        for (i, &node) in row.iter().enumerate() {
            result.insert(
                graph.nodes()[node].id.clone(),
                Position {
                    x: start_x + i as f64 * width + width / 2.0,
                    y: level as f64 * config.level_height,
                },
            );
        }
    }

    result
}

/// Compute each node's level by capped fixed-point relaxation
///
/// Roots (zero in-degree, or the earliest-inserted node when the graph
/// is one big cycle) are pinned at level 0; edges into a root are not
/// relaxed, which keeps the at-least-one-level-0 guarantee. All other
/// nodes start at 0 - disconnected nodes simply stay there.
pub fn assign_levels(graph: &GraphModel) -> Vec<u32> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let mut roots: HashSet<usize> = graph
        .nodes()
        .iter()
        .enumerate()
        .filter(|(_, node)| graph.neighbors(&node.id, Adjacency::In).is_empty())
        .map(|(i, _)| i)
        .collect();
    if roots.is_empty() {
        // Pure cycle: the earliest-inserted node becomes the sole root
        roots.insert(0);
    }

    let mut levels = vec![0u32; n];
    let pass_cap = 2 * n + 1;

    for _ in 0..pass_cap {
        let mut changed = false;
        for edge in graph.edges() {
            // Endpoints were validated at build time
            let (Some(u), Some(v)) = (
                graph.node_index(&edge.source),
                graph.node_index(&edge.target),
            ) else {
                continue;
            };
            if roots.contains(&v) {
                continue;
            }
            let proposed = levels[u] + 1;
            if proposed > levels[v] {
                levels[v] = proposed;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    levels
}
