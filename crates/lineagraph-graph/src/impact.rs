//! Change-impact analysis
//!
//! Bounded breadth-first reachability over the lineage graph: "what is
//! affected if this node changes". Downstream follows outgoing edges
//! (the blast radius), upstream follows incoming edges (the feeds),
//! and `both` merges the two.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use lineagraph_core::{Direction, GraphError};

use crate::model::GraphModel;

/// Hard ceiling on traversal depth, applied regardless of caller input
pub const MAX_DEPTH_CEILING: u32 = 50;

/// One reached node in an impact result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactEntry {
    /// Reached node id
    pub node_id: String,

    /// Hop count from the start node
    pub distance: u32,

    /// Direction the node was reached in; `both` when reached either way
    pub direction: Direction,
}

/// Bounded bidirectional reachability queries
pub struct ImpactAnalyzer;

impl ImpactAnalyzer {
    /// Analyze impact with the default depth ceiling
    pub fn analyze(
        graph: &GraphModel,
        start_id: &str,
        direction: Direction,
        max_depth: u32,
    ) -> Result<Vec<ImpactEntry>, GraphError> {
        Self::analyze_with_ceiling(graph, start_id, direction, max_depth, MAX_DEPTH_CEILING)
    }

    /// Analyze impact, clamping `max_depth` to the given ceiling
    ///
    /// The start node itself is never reported. Every node is reported
    /// at most once, at its minimum distance; a visited set keeps the
    /// traversal terminating on cyclic graphs. Results are ordered by
    /// ascending distance, ties broken by node insertion order.
    pub fn analyze_with_ceiling(
        graph: &GraphModel,
        start_id: &str,
        direction: Direction,
        max_depth: u32,
        ceiling: u32,
    ) -> Result<Vec<ImpactEntry>, GraphError> {
        if max_depth == 0 {
            return Err(GraphError::DepthOutOfRange {
                depth: max_depth,
                min: 1,
                max: ceiling,
            });
        }
        let max_depth = max_depth.min(ceiling);

        let Some(start) = graph.node_index(start_id) else {
            return Err(GraphError::NodeNotFound { id: start_id.to_string() });
        };

        // node index -> (distance, direction reached in)
        let mut reached: HashMap<usize, (u32, Direction)> = HashMap::new();

        if direction == Direction::Downstream || direction == Direction::Both {
            for (node, dist) in Self::walk(graph, start, max_depth, false) {
                reached.insert(node, (dist, Direction::Downstream));
            }
        }
        if direction == Direction::Upstream || direction == Direction::Both {
            for (node, dist) in Self::walk(graph, start, max_depth, true) {
                match reached.get_mut(&node) {
                    Some(existing) => {
                        // Reached downstream too: keep the shorter path
                        existing.0 = existing.0.min(dist);
                        existing.1 = Direction::Both;
                    }
                    None => {
                        reached.insert(node, (dist, Direction::Upstream));
                    }
                }
            }
        }

        let mut entries: Vec<(usize, u32, Direction)> = reached
            .into_iter()
            .map(|(node, (dist, dir))| (node, dist, dir))
            .collect();
        entries.sort_by_key(|&(node, dist, _)| (dist, node));

        Ok(entries
            .into_iter()
            .map(|(node, distance, direction)| ImpactEntry {
                node_id: graph.nodes()[node].id.clone(),
                distance,
                direction,
            })
            .collect())
    }

    /// BFS from `start`, following incoming edges when `reverse`
    ///
    /// Returns (node index, distance) pairs, excluding the start node.
    fn walk(graph: &GraphModel, start: usize, max_depth: u32, reverse: bool) -> Vec<(usize, u32)> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut result = Vec::new();

        visited.insert(start);
        queue.push_back((start, 0u32));

        while let Some((current, dist)) = queue.pop_front() {
            if dist >= max_depth {
                continue;
            }

            let edges = if reverse {
                graph.incoming_edges(current)
            } else {
                graph.outgoing_edges(current)
            };

            for &edge_idx in edges {
                let edge = &graph.edges()[edge_idx];
                let next_id = if reverse { &edge.source } else { &edge.target };
                // Endpoints were validated at build time
                let Some(next) = graph.node_index(next_id) else {
                    continue;
                };
                if visited.insert(next) {
                    result.push((next, dist + 1));
                    queue.push_back((next, dist + 1));
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BuildOptions, GraphModel};
    use lineagraph_core::{Edge, Node, NodeType};

    fn chain() -> GraphModel {
        GraphModel::build(
            vec![
                Node::new("a", NodeType::Table, "a"),
                Node::new("b", NodeType::View, "b"),
                Node::new("c", NodeType::Model, "c"),
            ],
            vec![
                Edge::new("e1", "a", "b", "derives_from"),
                Edge::new("e2", "b", "c", "derives_from"),
            ],
            BuildOptions::default(),
        )
        .unwrap()
        .graph
    }

    #[test]
    fn downstream_depth_one() {
        let graph = chain();
        let result = ImpactAnalyzer::analyze(&graph, "a", Direction::Downstream, 1).unwrap();
        assert_eq!(
            result,
            vec![ImpactEntry {
                node_id: "b".into(),
                distance: 1,
                direction: Direction::Downstream,
            }]
        );
    }

    #[test]
    fn downstream_depth_two() {
        let graph = chain();
        let result = ImpactAnalyzer::analyze(&graph, "a", Direction::Downstream, 2).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].node_id, "b");
        assert_eq!(result[0].distance, 1);
        assert_eq!(result[1].node_id, "c");
        assert_eq!(result[1].distance, 2);
    }

    #[test]
    fn upstream_walks_against_edges() {
        let graph = chain();
        let result = ImpactAnalyzer::analyze(&graph, "c", Direction::Upstream, 5).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].node_id, "b");
        assert_eq!(result[1].node_id, "a");
        assert!(result.iter().all(|e| e.direction == Direction::Upstream));
    }

    #[test]
    fn missing_start_node() {
        let graph = chain();
        let err = ImpactAnalyzer::analyze(&graph, "ghost", Direction::Both, 3).unwrap_err();
        assert_eq!(err, GraphError::NodeNotFound { id: "ghost".into() });
    }

    #[test]
    fn zero_depth_rejected() {
        let graph = chain();
        let err = ImpactAnalyzer::analyze(&graph, "a", Direction::Downstream, 0).unwrap_err();
        assert_eq!(err.code(), "DEPTH_OUT_OF_RANGE");
    }

    #[test]
    fn depth_clamped_to_ceiling() {
        let graph = chain();
        // Requesting far beyond the ceiling still reaches everything here
        let result =
            ImpactAnalyzer::analyze(&graph, "a", Direction::Downstream, u32::MAX).unwrap();
        assert_eq!(result.len(), 2);

        // A ceiling of 1 cuts the walk short no matter the request
        let result =
            ImpactAnalyzer::analyze_with_ceiling(&graph, "a", Direction::Downstream, 10, 1)
                .unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn cycle_terminates_and_reports_once() {
        let graph = GraphModel::build(
            vec![
                Node::new("a", NodeType::View, "a"),
                Node::new("b", NodeType::View, "b"),
                Node::new("c", NodeType::View, "c"),
            ],
            vec![
                Edge::new("e1", "a", "b", "references"),
                Edge::new("e2", "b", "c", "references"),
                Edge::new("e3", "c", "a", "references"),
            ],
            BuildOptions::default(),
        )
        .unwrap()
        .graph;

        let result = ImpactAnalyzer::analyze(&graph, "a", Direction::Downstream, 50).unwrap();
        // The start node is excluded even though the cycle returns to it
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].node_id, "b");
        assert_eq!(result[1].node_id, "c");
    }

    #[test]
    fn both_merges_at_minimum_distance() {
        // Diamond with a shortcut: a -> b -> d, a -> d
        let graph = GraphModel::build(
            vec![
                Node::new("a", NodeType::Table, "a"),
                Node::new("b", NodeType::View, "b"),
                Node::new("d", NodeType::Model, "d"),
            ],
            vec![
                Edge::new("e1", "a", "b", "derives_from"),
                Edge::new("e2", "b", "d", "derives_from"),
                Edge::new("e3", "d", "a", "feeds"),
            ],
            BuildOptions::default(),
        )
        .unwrap()
        .graph;

        // From a: downstream reaches d at 2, upstream reaches d at 1
        let result = ImpactAnalyzer::analyze(&graph, "a", Direction::Both, 5).unwrap();
        let d = result.iter().find(|e| e.node_id == "d").unwrap();
        assert_eq!(d.distance, 1);
        assert_eq!(d.direction, Direction::Both);
    }
}
