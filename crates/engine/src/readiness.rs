//! AND/OR readiness: which nodes are actionable, and is the goal in reach.
//!
//! Two related notions, both relative to a completion set `done`:
//!
//! - **satisfied**: the node's outcome is secured - it is done, or its
//!   prerequisite condition holds over satisfied prerequisites. This
//!   propagates: an OR node with one done prerequisite is satisfied, and
//!   so is anything that only needed that node.
//! - **ready**: the node could be acted on next - it is not done and its
//!   prerequisite condition already holds over the satisfied set.
//!
//! A node with no prerequisites is always ready but only satisfied once
//! it is actually done; otherwise satisfaction would cascade from the
//! sources and declare every goal reached up front.

use std::collections::HashSet;
use workplan_core::{Graph, NodeType};

use crate::order::{sinks, topo_order};

/// Whether a node's AND/OR prerequisite condition holds over `chosen`.
///
/// Vacuously true for nodes with no prerequisites.
fn prereqs_met(graph: &Graph, index: usize, chosen: &[bool]) -> bool {
    let preds = graph.predecessors(index);
    if preds.is_empty() {
        return true;
    }
    match graph.node(index).node_type {
        NodeType::And => preds.iter().all(|&p| chosen[p]),
        NodeType::Or => preds.iter().any(|&p| chosen[p]),
    }
}

fn satisfied_flags(graph: &Graph, done: &HashSet<String>) -> Vec<bool> {
    let done = graph.resolve_ids(done.iter().map(|id| id.as_str()));
    let mut sat = vec![false; graph.len()];
    // Single pass in topological order replaces a fixpoint loop: on an
    // acyclic graph every prerequisite is decided before its dependent.
    for &n in &topo_order(graph) {
        if done.contains(&n) {
            sat[n] = true;
        } else if !graph.predecessors(n).is_empty() {
            sat[n] = prereqs_met(graph, n, &sat);
        }
    }
    sat
}

/// Nodes whose outcome is secured under `done`, ascending insertion order.
///
/// Monotonic in `done`: growing the completion set never unsatisfies a
/// node. Unknown ids in `done` are ignored.
pub fn satisfied(graph: &Graph, done: &HashSet<String>) -> Vec<usize> {
    let sat = satisfied_flags(graph, done);
    (0..graph.len()).filter(|&n| sat[n]).collect()
}

/// Nodes that could be acted on next, ascending insertion order.
///
/// A node is ready when it is not done and its prerequisite condition
/// holds over the satisfied set: sources are always ready, an AND node
/// needs every prerequisite satisfied, an OR node needs one.
pub fn ready(graph: &Graph, done: &HashSet<String>) -> Vec<usize> {
    let done_idx = graph.resolve_ids(done.iter().map(|id| id.as_str()));
    let sat = satisfied_flags(graph, done);
    (0..graph.len())
        .filter(|&n| !done_idx.contains(&n) && prereqs_met(graph, n, &sat))
        .collect()
}

/// The ready set before any work has happened; equals the source set
/// when every node is AND-typed.
pub fn ready_initial(graph: &Graph) -> Vec<usize> {
    ready(graph, &HashSet::new())
}

/// Whether every sink is satisfied under `done`.
///
/// With an OR-typed sink (or OR ancestors) the goal can be reached
/// without completing every ancestor. An empty graph has no sinks and
/// never reports the goal reached.
pub fn goal_reached(graph: &Graph, done: &HashSet<String>) -> bool {
    let all_sinks = sinks(graph);
    if all_sinks.is_empty() {
        return false;
    }
    let sat = satisfied_flags(graph, done);
    all_sinks.into_iter().all(|n| sat[n])
}

#[cfg(test)]
mod tests {
    use super::*;
    use workplan_core::Node;

    fn done(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    /// nodes a, b, d, c with a->d, b->d, d->c; `d` gets the given type.
    fn diamond(d_type: NodeType) -> Graph {
        let mut g = Graph::new();
        g.add_node(Node::new("a")).unwrap();
        g.add_node(Node::new("b")).unwrap();
        g.add_node(Node::new("d").with_type(d_type)).unwrap();
        g.add_node(Node::new("c")).unwrap();
        g.add_edge("a", "d").unwrap();
        g.add_edge("b", "d").unwrap();
        g.add_edge("d", "c").unwrap();
        g
    }

    fn ids(graph: &Graph, indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&n| graph.id_of(n).to_string()).collect()
    }

    #[test]
    fn test_ready_initial_equals_sources_when_all_and() {
        let g = diamond(NodeType::And);
        assert_eq!(ids(&g, &ready_initial(&g)), vec!["a", "b"]);
        assert_eq!(ready_initial(&g), crate::order::sources(&g));
    }

    #[test]
    fn test_and_node_needs_every_prerequisite() {
        let g = diamond(NodeType::And);
        assert_eq!(ids(&g, &ready(&g, &done(&["a"]))), vec!["b"]);
        assert_eq!(ids(&g, &ready(&g, &done(&["a", "b"]))), vec!["d"]);
    }

    #[test]
    fn test_or_node_needs_one_prerequisite() {
        let g = diamond(NodeType::Or);
        // d is satisfied through a alone, which also unblocks c
        let now = ready(&g, &done(&["a"]));
        assert_eq!(ids(&g, &now), vec!["b", "d", "c"]);
    }

    #[test]
    fn test_satisfaction_propagates_through_or() {
        let g = diamond(NodeType::Or);
        let sat = satisfied(&g, &done(&["a"]));
        assert_eq!(ids(&g, &sat), vec!["a", "d", "c"]);
    }

    #[test]
    fn test_source_not_satisfied_until_done() {
        let g = diamond(NodeType::And);
        let sat = satisfied(&g, &done(&["a"]));
        // b is ready but not satisfied, so d stays unsatisfied
        assert_eq!(ids(&g, &sat), vec!["a"]);
    }

    #[test]
    fn test_goal_reached_through_or_shortcut() {
        let g = diamond(NodeType::Or);
        assert!(goal_reached(&g, &done(&["a"])));
        assert!(!goal_reached(&g, &done(&[])));
    }

    #[test]
    fn test_goal_requires_every_sink() {
        let mut g = Graph::new();
        g.add_node(Node::new("a")).unwrap();
        g.add_node(Node::new("b")).unwrap();
        assert!(!goal_reached(&g, &done(&["a"])));
        assert!(goal_reached(&g, &done(&["a", "b"])));
    }

    #[test]
    fn test_goal_never_reached_on_empty_graph() {
        assert!(!goal_reached(&Graph::new(), &done(&["a"])));
    }

    #[test]
    fn test_satisfaction_monotonic_in_done() {
        let g = diamond(NodeType::Or);
        let subsets: &[&[&str]] = &[&[], &["a"], &["a", "b"], &["a", "b", "d"]];
        let mut previous: Vec<usize> = Vec::new();
        for d in subsets {
            let current = satisfied(&g, &done(d));
            assert!(previous.iter().all(|n| current.contains(n)));
            previous = current;
        }
    }

    #[test]
    fn test_unknown_done_ids_ignored() {
        let g = diamond(NodeType::And);
        assert_eq!(ids(&g, &ready(&g, &done(&["ghost"]))), vec!["a", "b"]);
    }
}
