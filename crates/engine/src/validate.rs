//! Structural validation - the gate in front of every analysis.

use std::collections::VecDeque;
use workplan_core::{Graph, GraphError};

/// Check that the edge relation is acyclic.
///
/// Runs Kahn's algorithm: repeatedly remove nodes whose in-degree has
/// dropped to zero. Any node left unremoved sits on or behind a cycle;
/// the error carries that remaining subset in insertion order so the
/// caller can report which nodes to untangle.
///
/// Unknown endpoints, self-loops, and duplicate edges are already
/// rejected while the graph is built, so acyclicity is the only
/// invariant left to prove here.
pub fn validate(graph: &Graph) -> Result<(), GraphError> {
    let mut in_degree: Vec<usize> = (0..graph.len()).map(|n| graph.in_degree(n)).collect();
    let mut queue: VecDeque<usize> = (0..graph.len()).filter(|&n| in_degree[n] == 0).collect();
    let mut removed = vec![false; graph.len()];

    while let Some(n) = queue.pop_front() {
        removed[n] = true;
        for &succ in graph.successors(n) {
            in_degree[succ] -= 1;
            if in_degree[succ] == 0 {
                queue.push_back(succ);
            }
        }
    }

    if removed.iter().all(|&r| r) {
        Ok(())
    } else {
        let nodes = (0..graph.len())
            .filter(|&n| !removed[n])
            .map(|n| graph.id_of(n).to_string())
            .collect();
        Err(GraphError::Cycle { nodes })
    }
}
