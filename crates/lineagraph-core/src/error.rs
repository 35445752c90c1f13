//! Graph error types
//!
//! IMPORTANT: Error codes are versioned and stable.
//! NEVER rename or remove codes - they are part of the public API.
//! Add new codes with new names only.

use serde::{Deserialize, Serialize};

/// Typed failures returned by graph construction and queries
///
/// Layout and export never fail on a structurally valid graph, so
/// only build, impact analysis, and request parsing produce these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GraphError {
    /// Two input nodes share an id; names the first offender
    #[error("Duplicate node id: {id}")]
    DuplicateNodeId { id: String },

    /// An edge references a node absent from the build call (strict mode only)
    #[error("Edge {edge_id} references missing node {node_id}")]
    DanglingEdgeReference { edge_id: String, node_id: String },

    /// Impact analysis was asked to start from a node not in the graph
    #[error("Node not found: {id}")]
    NodeNotFound { id: String },

    /// Unknown layout algorithm identifier
    #[error("Unsupported layout algorithm: {name}")]
    UnsupportedLayoutAlgorithm { name: String },

    /// Unknown export format identifier
    #[error("Unsupported export format: {name}")]
    UnsupportedExportFormat { name: String },

    /// Traversal depth outside the accepted range
    #[error("Depth out of range: {depth} (expected {min}..={max})")]
    DepthOutOfRange { depth: u32, min: u32, max: u32 },
}

impl GraphError {
    /// Get the error code as a stable string identifier
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateNodeId { .. } => "DUPLICATE_NODE_ID",
            Self::DanglingEdgeReference { .. } => "DANGLING_EDGE_REFERENCE",
            Self::NodeNotFound { .. } => "NODE_NOT_FOUND",
            Self::UnsupportedLayoutAlgorithm { .. } => "UNSUPPORTED_LAYOUT_ALGORITHM",
            Self::UnsupportedExportFormat { .. } => "UNSUPPORTED_EXPORT_FORMAT",
            Self::DepthOutOfRange { .. } => "DEPTH_OUT_OF_RANGE",
        }
    }
}
