//! Workplan core data models.
//!
//! This crate defines the dependency graph that powers the planning
//! engine: nodes, prerequisite edges, construction-time validation, and
//! the JSON input record the graph is built from.

#![warn(missing_docs)]

mod error;
mod graph;
mod input;
mod node;

pub use error::GraphError;
pub use graph::Graph;
pub use input::{BuildOptions, GraphSpec, WeightSpec};
pub use node::{Node, NodeType, DEFAULT_EFFORT, DEFAULT_IMPACT};
