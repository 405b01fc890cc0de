//! Node model - the atomic unit of work in the dependency graph.

use serde::{Deserialize, Serialize};

/// Impact assumed for nodes without an explicit weight.
pub const DEFAULT_IMPACT: i64 = 3;

/// Effort assumed for nodes without an explicit weight.
pub const DEFAULT_EFFORT: i64 = 3;

/// Readiness semantics of a node's prerequisites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Ready only when every prerequisite is satisfied.
    And,
    /// Ready when any one prerequisite is satisfied.
    Or,
}

impl Default for NodeType {
    fn default() -> Self {
        NodeType::And
    }
}

impl NodeType {
    /// Parse a type label case-insensitively.
    ///
    /// Anything other than `"or"` falls back to [`NodeType::And`], matching
    /// the leniency of the input format.
    pub fn parse_lenient(label: &str) -> Self {
        if label.eq_ignore_ascii_case("or") {
            NodeType::Or
        } else {
            NodeType::And
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::And => "and",
            NodeType::Or => "or",
        }
    }
}

/// A node represents one discrete work item.
///
/// Completion is never stored on the node; it is supplied per analysis as
/// a separate done set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within a graph
    pub id: String,

    /// AND/OR readiness semantics
    pub node_type: NodeType,

    /// Expected impact of completing this node (intended range 1-5)
    pub impact: i64,

    /// Expected effort to complete this node (intended range 1-5)
    pub effort: i64,
}

impl Node {
    /// Create a node with default attributes (AND, impact 3, effort 3).
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: NodeType::default(),
            impact: DEFAULT_IMPACT,
            effort: DEFAULT_EFFORT,
        }
    }

    /// Set the readiness semantics.
    pub fn with_type(mut self, node_type: NodeType) -> Self {
        self.node_type = node_type;
        self
    }

    /// Set the impact weight.
    pub fn with_impact(mut self, impact: i64) -> Self {
        self.impact = impact;
        self
    }

    /// Set the effort weight.
    pub fn with_effort(mut self, effort: i64) -> Self {
        self.effort = effort;
        self
    }
}
