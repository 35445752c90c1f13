//! Integration tests for the export pipeline: facts -> graph ->
//! layout -> artifact

use std::collections::HashSet;

use pretty_assertions::assert_eq;

use lineagraph_core::{Edge, EngineConfig, LayoutAlgorithm, Node, NodeType};
use lineagraph_export::{from_json, to_dot, to_json_string, to_svg};
use lineagraph_graph::{BuildOptions, GraphModel};
use lineagraph_layout::layout;

fn sample_graph() -> GraphModel {
    GraphModel::build(
        vec![
            Node::new("raw.orders", NodeType::Table, "orders").with_namespace("raw"),
            Node::new("stg.orders", NodeType::View, "stg_orders"),
            Node::new("sem.sales", NodeType::Model, "sales"),
            Node::new("metric.revenue", NodeType::Metric, "revenue"),
        ],
        vec![
            Edge::new("e1", "raw.orders", "stg.orders", "derives_from"),
            Edge::new("e2", "stg.orders", "sem.sales", "derives_from"),
            Edge::new("e3", "sem.sales", "metric.revenue", "computes"),
        ],
        BuildOptions::default(),
    )
    .unwrap()
    .graph
}

#[test]
fn json_export_roundtrips_through_every_layout() {
    let graph = sample_graph();
    let config = EngineConfig::default();

    for algorithm in [
        LayoutAlgorithm::Hierarchical,
        LayoutAlgorithm::Force,
        LayoutAlgorithm::Circular,
        LayoutAlgorithm::Tree,
    ] {
        let positions = layout(&graph, algorithm, Some(3), &config);
        let text = to_json_string(&graph, &positions);
        let (rebuilt, relayout) = from_json(&text).unwrap();

        let ids: HashSet<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
        let rebuilt_ids: HashSet<&str> =
            rebuilt.graph.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, rebuilt_ids);
        assert_eq!(rebuilt.graph.edge_count(), graph.edge_count());
        assert_eq!(relayout, positions);
        assert!(rebuilt.warnings.is_empty());
    }
}

#[test]
fn dot_export_is_stable_and_complete() {
    let graph = sample_graph();

    let first = to_dot(&graph);
    let second = to_dot(&graph);
    assert_eq!(first, second);

    for node in graph.nodes() {
        assert!(first.contains(&format!("\"{}\"", node.id)));
    }
    assert_eq!(first.matches("->").count(), graph.edge_count());
}

#[test]
fn svg_export_draws_every_record() {
    let graph = sample_graph();
    let config = EngineConfig::default();
    let positions = layout(&graph, LayoutAlgorithm::Hierarchical, None, &config);

    let svg = to_svg(&graph, &positions, &config);
    assert!(svg.contains("viewBox="));
    assert_eq!(svg.matches("<line").count(), graph.edge_count());
    // One shape and one label per node
    assert_eq!(
        svg.matches("<rect").count() + svg.matches("<ellipse").count(),
        graph.node_count()
    );
    assert_eq!(svg.matches("<text").count(), graph.node_count());
}
