//! Engine configuration
//!
//! Layout geometry and traversal bounds, overridable from a
//! `lineagraph.toml` file. Every field has a default matching the
//! reference geometry, so an absent file means stock behavior.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable constants for layout and impact analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Horizontal slot per node in a hierarchical row
    pub node_width: f64,

    /// Vertical distance between hierarchical levels
    pub level_height: f64,

    /// Columns in the pseudo-force grid
    pub grid_columns: usize,

    /// Horizontal spacing between grid columns
    pub grid_column_spacing: f64,

    /// Vertical spacing between grid rows
    pub grid_row_spacing: f64,

    /// Upper bound (exclusive) of the pseudo-force jitter
    pub jitter_bound: f64,

    /// Minimum circular layout radius
    pub circular_min_radius: f64,

    /// Circular radius contribution per node
    pub circular_radius_per_node: f64,

    /// Tree layout horizontal stretch over hierarchical
    pub tree_scale_x: f64,

    /// Tree layout vertical stretch over hierarchical
    pub tree_scale_y: f64,

    /// Padding around the SVG bounding box
    pub svg_padding: f64,

    /// Hard ceiling on impact traversal depth, regardless of caller input
    pub max_depth_ceiling: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            node_width: 180.0,
            level_height: 200.0,
            grid_columns: 4,
            grid_column_spacing: 200.0,
            grid_row_spacing: 150.0,
            jitter_bound: 100.0,
            circular_min_radius: 150.0,
            circular_radius_per_node: 30.0,
            tree_scale_x: 1.5,
            tree_scale_y: 1.2,
            svg_padding: 40.0,
            max_depth_ceiling: 50,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
