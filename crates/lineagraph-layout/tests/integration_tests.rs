//! Integration tests for the layout strategies

use pretty_assertions::assert_eq;

use lineagraph_core::{Edge, EngineConfig, LayoutAlgorithm, Node, NodeType};
use lineagraph_graph::{BuildOptions, GraphModel};
use lineagraph_layout::layout;

fn build(nodes: Vec<Node>, edges: Vec<Edge>) -> GraphModel {
    GraphModel::build(nodes, edges, BuildOptions::default())
        .unwrap()
        .graph
}

#[test]
fn table_feeding_model_stacks_vertically() {
    let graph = build(
        vec![
            Node::new("T1", NodeType::Table, "orders"),
            Node::new("M1", NodeType::Model, "revenue_model"),
        ],
        vec![Edge::new("e1", "T1", "M1", "derives_from")],
    );
    let config = EngineConfig::default();

    let positions = layout(&graph, LayoutAlgorithm::Hierarchical, None, &config);
    let t1 = positions.get("T1").unwrap();
    let m1 = positions.get("M1").unwrap();

    // T1 is the root row, M1 one level below it
    assert_eq!(t1.y, 0.0);
    assert_eq!(m1.y, config.level_height);
}

#[test]
fn all_algorithms_agree_on_coverage() {
    // A mix of a chain, a cycle, and an isolated node
    let graph = build(
        vec![
            Node::new("a", NodeType::Table, "a"),
            Node::new("b", NodeType::View, "b"),
            Node::new("c", NodeType::View, "c"),
            Node::new("d", NodeType::Model, "d"),
            Node::new("island", NodeType::External, "island"),
        ],
        vec![
            Edge::new("e1", "a", "b", "derives_from"),
            Edge::new("e2", "b", "c", "references"),
            Edge::new("e3", "c", "b", "references"),
            Edge::new("e4", "c", "d", "derives_from"),
        ],
    );
    let config = EngineConfig::default();

    for algorithm in [
        LayoutAlgorithm::Hierarchical,
        LayoutAlgorithm::Force,
        LayoutAlgorithm::Circular,
        LayoutAlgorithm::Tree,
    ] {
        let positions = layout(&graph, algorithm, Some(99), &config);
        assert_eq!(positions.len(), 5, "{} must place every node", algorithm);
    }
}

#[test]
fn identical_inputs_yield_identical_layouts() {
    let graph = build(
        (0..12)
            .map(|i| Node::new(format!("n{}", i), NodeType::Table, format!("n{}", i)))
            .collect(),
        vec![Edge::new("e1", "n0", "n1", "derives_from")],
    );
    let config = EngineConfig::default();

    for algorithm in [
        LayoutAlgorithm::Hierarchical,
        LayoutAlgorithm::Force,
        LayoutAlgorithm::Circular,
        LayoutAlgorithm::Tree,
    ] {
        let a = layout(&graph, algorithm, Some(5), &config);
        let b = layout(&graph, algorithm, Some(5), &config);
        assert_eq!(a, b, "{} must be a pure function of its inputs", algorithm);
    }
}

#[test]
fn custom_geometry_flows_through() {
    let graph = build(
        vec![
            Node::new("a", NodeType::Table, "a"),
            Node::new("b", NodeType::Model, "b"),
        ],
        vec![Edge::new("e1", "a", "b", "derives_from")],
    );

    let config = EngineConfig {
        level_height: 500.0,
        ..EngineConfig::default()
    };
    let positions = layout(&graph, LayoutAlgorithm::Hierarchical, None, &config);
    assert_eq!(positions.get("b").unwrap().y, 500.0);
}
