//! Error taxonomy for graph construction and validation.

/// Errors that can occur while building or validating a graph.
///
/// All structural problems are reported before any analysis runs; once a
/// graph validates, the analysis functions themselves cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge references an id absent from the node set
    #[error("edge references unknown node '{id}'")]
    UnknownNode {
        /// The missing id
        id: String,
    },

    /// A node id was inserted twice
    #[error("duplicate node '{id}'")]
    DuplicateNode {
        /// The repeated id
        id: String,
    },

    /// The same ordered pair was added twice
    #[error("duplicate edge '{from}' -> '{to}'")]
    DuplicateEdge {
        /// Edge origin
        from: String,
        /// Edge target
        to: String,
    },

    /// An edge from a node to itself
    #[error("self-loop on node '{id}'")]
    SelfLoop {
        /// The offending id
        id: String,
    },

    /// The edge relation contains a directed cycle
    #[error("graph has a cycle involving nodes: {}", nodes.join(", "))]
    Cycle {
        /// The cyclic node subset, in insertion order
        nodes: Vec<String>,
    },

    /// Non-positive impact under strict weight validation
    #[error("node '{id}' has non-positive impact {impact}")]
    InvalidWeight {
        /// The offending id
        id: String,
        /// The rejected impact value
        impact: i64,
    },
}
