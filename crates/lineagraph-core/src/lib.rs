//! Lineagraph Core
//!
//! Core domain model with stable, versioned types.
//! Never rename error codes - they are part of the public API.

pub mod config;
pub mod error;
pub mod node;
pub mod request;

pub use config::{EngineConfig, ConfigError};
pub use error::GraphError;
pub use node::{Edge, Node, NodeType};
pub use request::{Direction, ExportFormat, LayoutAlgorithm, LineageRequest};
