//! Validated lineage graph with adjacency indices
//!
//! A `GraphModel` is immutable after construction. "Updating" lineage
//! means building a fresh graph from a fresh fact set; nothing here
//! mutates in place.

use std::collections::{HashMap, HashSet};

use lineagraph_core::{Edge, GraphError, Node, NodeType};

/// Which adjacency a neighbor query follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    /// Outgoing edges (targets of this node)
    Out,

    /// Incoming edges (sources feeding this node)
    In,

    /// Outgoing then incoming, duplicates suppressed
    Both,
}

/// Options controlling graph construction
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Fail on dangling edge references instead of dropping them
    ///
    /// Lenient (the default) suits UI-facing queries, where facts
    /// sourced from a live catalog are expected to be occasionally
    /// incomplete.
    pub strict: bool,
}

/// A built graph together with its construction warnings
#[derive(Debug, Clone)]
pub struct GraphBuild {
    /// The validated graph
    pub graph: GraphModel,

    /// Ids of edges dropped for dangling references (lenient mode)
    pub warnings: Vec<String>,
}

/// Immutable lineage graph with forward and reverse adjacency
///
/// Nodes and edges keep their insertion order; adjacency lists hold
/// edge indices in insertion order too, which is what makes traversal
/// and export deterministic.
#[derive(Debug, Clone)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,

    /// Node id -> index into `nodes`
    index: HashMap<String, usize>,

    /// Per node: indices of edges leaving it
    outgoing: Vec<Vec<usize>>,

    /// Per node: indices of edges entering it
    incoming: Vec<Vec<usize>>,
}

impl GraphModel {
    /// Build a graph from raw lineage facts
    ///
    /// Fails with `DuplicateNodeId` on the first repeated node id.
    /// Edges referencing unknown nodes fail the build in strict mode;
    /// in lenient mode they are dropped and reported in `warnings`.
    pub fn build(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        options: BuildOptions,
    ) -> Result<GraphBuild, GraphError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateNodeId { id: node.id.clone() });
            }
        }

        let mut kept = Vec::with_capacity(edges.len());
        let mut warnings = Vec::new();
        let mut outgoing = vec![Vec::new(); nodes.len()];
        let mut incoming = vec![Vec::new(); nodes.len()];

        for edge in edges {
            let source = index.get(&edge.source).copied();
            let target = index.get(&edge.target).copied();

            let (src, tgt) = match (source, target) {
                (Some(s), Some(t)) => (s, t),
                _ => {
                    let missing = if source.is_none() {
                        edge.source.clone()
                    } else {
                        edge.target.clone()
                    };
                    if options.strict {
                        return Err(GraphError::DanglingEdgeReference {
                            edge_id: edge.id,
                            node_id: missing,
                        });
                    }
                    warnings.push(edge.id);
                    continue;
                }
            };

            let edge_idx = kept.len();
            outgoing[src].push(edge_idx);
            incoming[tgt].push(edge_idx);
            kept.push(edge);
        }

        Ok(GraphBuild {
            graph: GraphModel {
                nodes,
                edges: kept,
                index,
                outgoing,
                incoming,
            },
            warnings,
        })
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All kept edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether a node id is present
    pub fn has_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Insertion index of a node id
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of kept edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Neighboring node ids, in edge insertion order
    ///
    /// `Both` yields outgoing neighbors first, then incoming, with
    /// already-seen ids suppressed.
    pub fn neighbors(&self, id: &str, direction: Adjacency) -> Vec<&str> {
        let Some(&node) = self.index.get(id) else {
            return Vec::new();
        };

        match direction {
            Adjacency::Out => self.outgoing[node]
                .iter()
                .map(|&e| self.edges[e].target.as_str())
                .collect(),
            Adjacency::In => self.incoming[node]
                .iter()
                .map(|&e| self.edges[e].source.as_str())
                .collect(),
            Adjacency::Both => {
                let mut seen = HashSet::new();
                let mut result = Vec::new();
                let out = self.outgoing[node].iter().map(|&e| self.edges[e].target.as_str());
                let inn = self.incoming[node].iter().map(|&e| self.edges[e].source.as_str());
                for id in out.chain(inn) {
                    if seen.insert(id) {
                        result.push(id);
                    }
                }
                result
            }
        }
    }

    /// Indices of outgoing edges for a node index
    pub(crate) fn outgoing_edges(&self, node: usize) -> &[usize] {
        &self.outgoing[node]
    }

    /// Indices of incoming edges for a node index
    pub(crate) fn incoming_edges(&self, node: usize) -> &[usize] {
        &self.incoming[node]
    }
}

/// Drop COLUMN nodes and every edge touching them
///
/// Implements the request descriptor's `include_columns: false` before
/// the graph is built, so column-level facts never reach layout or
/// impact analysis.
pub fn strip_columns(nodes: Vec<Node>, edges: Vec<Edge>) -> (Vec<Node>, Vec<Edge>) {
    let column_ids: HashSet<String> = nodes
        .iter()
        .filter(|n| n.node_type == NodeType::Column)
        .map(|n| n.id.clone())
        .collect();

    let nodes = nodes
        .into_iter()
        .filter(|n| n.node_type != NodeType::Column)
        .collect();
    let edges = edges
        .into_iter()
        .filter(|e| !column_ids.contains(&e.source) && !column_ids.contains(&e.target))
        .collect();

    (nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineagraph_core::NodeType;

    fn node(id: &str) -> Node {
        Node::new(id, NodeType::Table, id)
    }

    #[test]
    fn build_counts_match_input() {
        let build = GraphModel::build(
            vec![node("a"), node("b"), node("c")],
            vec![
                Edge::new("e1", "a", "b", "derives_from"),
                Edge::new("e2", "b", "c", "derives_from"),
            ],
            BuildOptions::default(),
        )
        .unwrap();

        assert_eq!(build.graph.node_count(), 3);
        assert_eq!(build.graph.edge_count(), 2);
        assert!(build.warnings.is_empty());
    }

    #[test]
    fn duplicate_node_id_fails() {
        let err = GraphModel::build(
            vec![node("a"), node("a")],
            vec![],
            BuildOptions::default(),
        )
        .unwrap_err();

        assert_eq!(err, GraphError::DuplicateNodeId { id: "a".into() });
    }

    #[test]
    fn dangling_edge_dropped_with_warning() {
        let build = GraphModel::build(
            vec![node("a")],
            vec![Edge::new("e1", "a", "ghost", "references")],
            BuildOptions::default(),
        )
        .unwrap();

        assert_eq!(build.graph.edge_count(), 0);
        assert_eq!(build.warnings, vec!["e1".to_string()]);
    }

    #[test]
    fn dangling_edge_fails_in_strict_mode() {
        let err = GraphModel::build(
            vec![node("a")],
            vec![Edge::new("e1", "ghost", "a", "references")],
            BuildOptions { strict: true },
        )
        .unwrap_err();

        assert_eq!(
            err,
            GraphError::DanglingEdgeReference {
                edge_id: "e1".into(),
                node_id: "ghost".into(),
            }
        );
    }

    #[test]
    fn neighbors_preserve_edge_order() {
        let build = GraphModel::build(
            vec![node("a"), node("b"), node("c"), node("d")],
            vec![
                Edge::new("e1", "a", "c", "derives_from"),
                Edge::new("e2", "a", "b", "derives_from"),
                Edge::new("e3", "d", "a", "derives_from"),
            ],
            BuildOptions::default(),
        )
        .unwrap();
        let graph = build.graph;

        assert_eq!(graph.neighbors("a", Adjacency::Out), vec!["c", "b"]);
        assert_eq!(graph.neighbors("a", Adjacency::In), vec!["d"]);
        assert_eq!(graph.neighbors("a", Adjacency::Both), vec!["c", "b", "d"]);
        assert!(graph.neighbors("ghost", Adjacency::Both).is_empty());
    }

    #[test]
    fn both_suppresses_duplicates() {
        // Reciprocal pair: a -> b and b -> a
        let build = GraphModel::build(
            vec![node("a"), node("b")],
            vec![
                Edge::new("e1", "a", "b", "derives_from"),
                Edge::new("e2", "b", "a", "derives_from"),
            ],
            BuildOptions::default(),
        )
        .unwrap();

        assert_eq!(build.graph.neighbors("a", Adjacency::Both), vec!["b"]);
    }

    #[test]
    fn strip_columns_removes_nodes_and_touching_edges() {
        let nodes = vec![
            node("t1"),
            Node::new("t1.id", NodeType::Column, "id"),
            node("m1"),
        ];
        let edges = vec![
            Edge::new("e1", "t1", "m1", "derives_from"),
            Edge::new("e2", "t1.id", "m1", "computes"),
        ];

        let (nodes, edges) = strip_columns(nodes, edges);
        assert_eq!(nodes.len(), 2);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].id, "e1");
    }
}
