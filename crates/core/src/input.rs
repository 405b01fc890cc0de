//! The JSON input record a graph is built from.
//!
//! External callers hand the planner a record of node ids, prerequisite
//! edges, and optional per-node weights, types, and a completion list:
//!
//! ```json
//! {
//!   "nodes": ["a", "b"],
//!   "edges": [["a", "b"]],
//!   "weights": {"a": {"impact": 5, "effort": 1}},
//!   "node_types": {"b": "or"},
//!   "done": ["a"]
//! }
//! ```
//!
//! Defaults (impact 3, effort 3, type AND) are applied once here, during
//! construction, so the analysis functions never see missing attributes.

use crate::{Graph, GraphError, Node, NodeType, DEFAULT_EFFORT, DEFAULT_IMPACT};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// Per-node weight entry of the input record.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeightSpec {
    /// Impact (defaults to 3 when omitted)
    #[serde(default = "default_impact")]
    pub impact: i64,
    /// Effort (defaults to 3 when omitted)
    #[serde(default = "default_effort")]
    pub effort: i64,
}

fn default_impact() -> i64 {
    DEFAULT_IMPACT
}

fn default_effort() -> i64 {
    DEFAULT_EFFORT
}

impl Default for WeightSpec {
    fn default() -> Self {
        Self {
            impact: DEFAULT_IMPACT,
            effort: DEFAULT_EFFORT,
        }
    }
}

/// Options applied while building a graph from a record.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Reject non-positive impact values instead of accepting them.
    pub strict_weights: bool,
}

/// The external input record.
///
/// Weight and type entries naming ids absent from `nodes` are ignored, as
/// are `done` entries naming unknown ids.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphSpec {
    /// Node ids, in the order that later breaks ties
    #[serde(default)]
    pub nodes: Vec<String>,

    /// Prerequisite edges as `(from, to)` pairs
    #[serde(default)]
    pub edges: Vec<(String, String)>,

    /// Optional per-node weights
    #[serde(default)]
    pub weights: HashMap<String, WeightSpec>,

    /// Optional per-node readiness types (`"and"` / `"or"`)
    #[serde(default)]
    pub node_types: HashMap<String, String>,

    /// Ids already completed, if a progress analysis is wanted
    #[serde(default)]
    pub done: Option<Vec<String>>,
}

impl GraphSpec {
    /// Build a graph from the record, applying defaults for unlisted nodes.
    pub fn build(&self, options: &BuildOptions) -> Result<Graph, GraphError> {
        let mut graph = Graph::new();
        for id in &self.nodes {
            let weight = self.weights.get(id).copied().unwrap_or_default();
            if options.strict_weights && weight.impact <= 0 {
                return Err(GraphError::InvalidWeight {
                    id: id.clone(),
                    impact: weight.impact,
                });
            }
            let node_type = self
                .node_types
                .get(id)
                .map(|label| NodeType::parse_lenient(label))
                .unwrap_or_default();
            graph.add_node(
                Node::new(id.clone())
                    .with_type(node_type)
                    .with_impact(weight.impact)
                    .with_effort(weight.effort),
            )?;
        }
        for (from, to) in &self.edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// The completion set, if the record carried one.
    pub fn done_set(&self) -> Option<HashSet<String>> {
        self.done
            .as_ref()
            .map(|ids| ids.iter().cloned().collect())
    }
}
