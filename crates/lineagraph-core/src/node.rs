//! Lineage node and edge types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of data asset a node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    /// Physical table in the lakehouse
    Table,

    /// View over one or more tables
    View,

    /// Semantic model definition
    Model,

    /// Metric computed by a semantic model
    Metric,

    /// Dimension exposed by a semantic model
    Dimension,

    /// Individual column of a table or view
    Column,

    /// File-backed asset (e.g. a staged upload)
    File,

    /// Asset outside the catalog's visibility
    External,
}

impl NodeType {
    /// Get the node type as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "TABLE",
            Self::View => "VIEW",
            Self::Model => "MODEL",
            Self::Metric => "METRIC",
            Self::Dimension => "DIMENSION",
            Self::Column => "COLUMN",
            Self::File => "FILE",
            Self::External => "EXTERNAL",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A data asset in the lineage graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Globally unique identifier within a graph
    pub id: String,

    /// Asset kind
    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Display name
    pub name: String,

    /// Catalog/schema or owning-model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Opaque key/value metadata, passed through untouched
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl Node {
    /// Create a new node with no namespace or metadata
    pub fn new(id: impl Into<String>, node_type: NodeType, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type,
            name: name.into(),
            namespace: None,
            metadata: HashMap::new(),
        }
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A directed dependency between two nodes
///
/// The edge points `source -> target`, meaning the target derives
/// from / depends on the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier within a graph
    pub id: String,

    /// Id of the upstream node
    pub source: String,

    /// Id of the downstream node
    pub target: String,

    /// Free-form relation label (e.g. `derives_from`, `computes`)
    pub relation: String,
}

impl Edge {
    /// Create a new edge
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            relation: relation.into(),
        }
    }
}
