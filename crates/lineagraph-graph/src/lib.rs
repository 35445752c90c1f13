//! Lineage graph construction and traversal
//!
//! Builds a validated, immutable graph with forward and reverse
//! adjacency, and answers bounded impact queries over it.

pub mod impact;
pub mod model;

pub use impact::{ImpactAnalyzer, ImpactEntry, MAX_DEPTH_CEILING};
pub use model::{Adjacency, BuildOptions, GraphBuild, GraphModel, strip_columns};
