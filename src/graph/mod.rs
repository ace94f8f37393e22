//! Package dependency graph: model, parsing, deterministic ordering
//!
//! This module is the pipeline core. `parse` turns `.dot` text into a
//! [`PackageGraph`], `model` answers reachability queries over it, and
//! `topo` produces the stable dependents-first ordering the linker needs.

pub mod model;
pub mod parse;
pub mod topo;

pub use model::PackageGraph;
pub use parse::{parse_dot, parse_dot_file, MalformedEdge, ParsedDot};
pub use topo::{topological_sort, TopoOrder};
