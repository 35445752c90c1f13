//! Portable exchange formats for positioned lineage graphs
//!
//! Three serializers over `(GraphModel, LayoutResult)`: a
//! round-trippable JSON document, Graphviz DOT text, and a standalone
//! SVG image. All are pure functions of their inputs and never fail on
//! a structurally valid graph; only re-parsing an export can error.

pub mod dot;
pub mod json;
pub mod svg;

pub use dot::to_dot;
pub use json::{from_json, to_json, to_json_string, ExportDocument, ExportNode, ParseError};
pub use svg::to_svg;
