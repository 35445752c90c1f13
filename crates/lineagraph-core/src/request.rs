//! Request descriptors for graph, impact, and export queries

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GraphError;

/// Traversal direction relative to edge orientation
///
/// Edges point `source -> target`; downstream follows edges, upstream
/// walks against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// What feeds this node (incoming edges)
    Upstream,

    /// What depends on this node (outgoing edges)
    Downstream,

    /// Both directions, merged
    Both,
}

impl Direction {
    /// Get the direction as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upstream => "upstream",
            Self::Downstream => "downstream",
            Self::Both => "both",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upstream" => Ok(Self::Upstream),
            "downstream" => Ok(Self::Downstream),
            "both" => Ok(Self::Both),
            other => Err(format!(
                "unknown direction: {} (expected upstream, downstream, or both)",
                other
            )),
        }
    }
}

/// Positioning strategy identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutAlgorithm {
    /// Level-based layering from root nodes (default)
    Hierarchical,

    /// Grid placement with seeded jitter; not a physics simulation
    Force,

    /// Single ring, insertion order
    Circular,

    /// Hierarchical with widened spacing
    Tree,
}

impl LayoutAlgorithm {
    /// Get the algorithm as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hierarchical => "hierarchical",
            Self::Force => "force",
            Self::Circular => "circular",
            Self::Tree => "tree",
        }
    }
}

impl Default for LayoutAlgorithm {
    fn default() -> Self {
        Self::Hierarchical
    }
}

impl std::fmt::Display for LayoutAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LayoutAlgorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hierarchical" => Ok(Self::Hierarchical),
            "force" => Ok(Self::Force),
            "circular" => Ok(Self::Circular),
            "tree" => Ok(Self::Tree),
            other => Err(GraphError::UnsupportedLayoutAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

/// Export artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Round-trippable JSON document
    Json,

    /// Graphviz DOT text
    Dot,

    /// Standalone SVG image
    Svg,
}

impl ExportFormat {
    /// Get the format as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Dot => "dot",
            Self::Svg => "svg",
        }
    }

    /// Suggested download file name (`lineage.<ext>`)
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "lineage.json",
            Self::Dot => "lineage.dot",
            Self::Svg => "lineage.svg",
        }
    }

    /// Content type for HTTP responses
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Dot => "text/vnd.graphviz",
            Self::Svg => "image/svg+xml",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "dot" => Ok(Self::Dot),
            "svg" => Ok(Self::Svg),
            other => Err(GraphError::UnsupportedExportFormat {
                name: other.to_string(),
            }),
        }
    }
}

/// Minimum traversal depth a request may ask for
pub const REQUEST_MIN_DEPTH: u32 = 1;

/// Maximum traversal depth a request may ask for
pub const REQUEST_MAX_DEPTH: u32 = 10;

/// A lineage query as received from the UI layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageRequest {
    /// Traversal direction
    pub direction: Direction,

    /// Traversal depth bound (1..=10)
    pub depth: u32,

    /// Positioning strategy
    #[serde(default)]
    pub layout_algorithm: LayoutAlgorithm,

    /// Whether COLUMN nodes are kept in the graph
    #[serde(default)]
    pub include_columns: bool,
}

impl LineageRequest {
    /// Check that the requested depth is within the accepted range
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.depth < REQUEST_MIN_DEPTH || self.depth > REQUEST_MAX_DEPTH {
            return Err(GraphError::DepthOutOfRange {
                depth: self.depth,
                min: REQUEST_MIN_DEPTH,
                max: REQUEST_MAX_DEPTH,
            });
        }
        Ok(())
    }
}
