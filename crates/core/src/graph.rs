//! The dependency graph: insertion-ordered nodes plus prerequisite edges.

use crate::{GraphError, Node};
use std::collections::{HashMap, HashSet};

/// A directed dependency graph of work items.
///
/// Nodes keep their insertion order, which every analysis uses as the
/// deterministic tie-break key. Construction rejects duplicate ids,
/// unknown edge endpoints, self-loops, and duplicate edges eagerly;
/// cycle detection runs separately in the engine's validator.
///
/// Once built for an analysis the graph is treated as an immutable
/// snapshot: all analysis functions borrow it and none mutates it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<(usize, usize)>,
    edge_set: HashSet<(usize, usize)>,
    preds: Vec<Vec<usize>>,
    succs: Vec<Vec<usize>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node. Fails if the id is already present.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.index.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode { id: node.id });
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        self.preds.push(Vec::new());
        self.succs.push(Vec::new());
        Ok(())
    }

    /// Add a prerequisite edge: `from` must complete before `to`.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        let u = self.index_of(from).ok_or_else(|| GraphError::UnknownNode {
            id: from.to_string(),
        })?;
        let v = self.index_of(to).ok_or_else(|| GraphError::UnknownNode {
            id: to.to_string(),
        })?;
        if u == v {
            return Err(GraphError::SelfLoop { id: from.to_string() });
        }
        if !self.edge_set.insert((u, v)) {
            return Err(GraphError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.edges.push((u, v));
        self.succs[u].push(v);
        self.preds[v].push(u);
        Ok(())
    }

    /// Look up a node's insertion index.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Get a node by insertion index.
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Get a node by id.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    /// The node id at an insertion index.
    pub fn id_of(&self, index: usize) -> &str {
        &self.nodes[index].id
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges as `(from, to)` index pairs, in insertion order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Direct prerequisites of a node, in edge insertion order.
    pub fn predecessors(&self, index: usize) -> &[usize] {
        &self.preds[index]
    }

    /// Direct dependents of a node, in edge insertion order.
    pub fn successors(&self, index: usize) -> &[usize] {
        &self.succs[index]
    }

    /// Number of prerequisites of a node.
    pub fn in_degree(&self, index: usize) -> usize {
        self.preds[index].len()
    }

    /// Number of dependents of a node.
    pub fn out_degree(&self, index: usize) -> usize {
        self.succs[index].len()
    }

    /// Resolve a set of node ids to insertion indices, ignoring unknown ids.
    pub fn resolve_ids<'a, I>(&self, ids: I) -> HashSet<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter().filter_map(|id| self.index_of(id)).collect()
    }
}
