//! Topological ordering, sources/sinks, and layering.
//!
//! All functions assume the graph has already passed [`crate::validate`];
//! they would loop short (not forever) on a cyclic graph but their output
//! would be meaningless.

use std::collections::BTreeSet;
use workplan_core::Graph;

/// Deterministic topological order, as insertion indices.
///
/// Kahn's algorithm; whenever several nodes are simultaneously eligible,
/// the one with the smallest insertion index is taken first. Many valid
/// topological orders usually exist, so fixing the tie-break makes runs
/// reproducible on identical input.
pub fn topo_order(graph: &Graph) -> Vec<usize> {
    let mut in_degree: Vec<usize> = (0..graph.len()).map(|n| graph.in_degree(n)).collect();
    let mut eligible: BTreeSet<usize> =
        (0..graph.len()).filter(|&n| in_degree[n] == 0).collect();
    let mut order = Vec::with_capacity(graph.len());

    while let Some(&n) = eligible.iter().next() {
        eligible.remove(&n);
        order.push(n);
        for &succ in graph.successors(n) {
            in_degree[succ] -= 1;
            if in_degree[succ] == 0 {
                eligible.insert(succ);
            }
        }
    }

    order
}

/// Nodes with no prerequisites, in insertion order.
pub fn sources(graph: &Graph) -> Vec<usize> {
    (0..graph.len()).filter(|&n| graph.in_degree(n) == 0).collect()
}

/// Nodes with no dependents, in insertion order.
pub fn sinks(graph: &Graph) -> Vec<usize> {
    (0..graph.len()).filter(|&n| graph.out_degree(n) == 0).collect()
}

/// Topological generations: layer 0 is the sources; layer k holds the
/// nodes whose every prerequisite sits in an earlier layer.
///
/// Nodes within one layer have no path between them and can be worked in
/// parallel. The layers partition the node set.
pub fn layers(graph: &Graph) -> Vec<Vec<usize>> {
    let mut depth = vec![0usize; graph.len()];
    let mut max_depth = 0;
    for &n in &topo_order(graph) {
        let d = graph
            .predecessors(n)
            .iter()
            .map(|&p| depth[p] + 1)
            .max()
            .unwrap_or(0);
        depth[n] = d;
        max_depth = max_depth.max(d);
    }

    if graph.is_empty() {
        return Vec::new();
    }

    let mut result = vec![Vec::new(); max_depth + 1];
    for n in 0..graph.len() {
        result[depth[n]].push(n);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use workplan_core::Node;

    fn graph(ids: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut g = Graph::new();
        for id in ids {
            g.add_node(Node::new(*id)).unwrap();
        }
        for (from, to) in edges {
            g.add_edge(from, to).unwrap();
        }
        g
    }

    fn ids(graph: &Graph, indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&n| graph.id_of(n).to_string()).collect()
    }

    #[test]
    fn test_topo_order_respects_edges() {
        let g = graph(&["a", "b", "d", "c"], &[("a", "d"), ("b", "d"), ("d", "c")]);
        let order = topo_order(&g);
        assert_eq!(ids(&g, &order), vec!["a", "b", "d", "c"]);

        let position: Vec<usize> = {
            let mut pos = vec![0; g.len()];
            for (i, &n) in order.iter().enumerate() {
                pos[n] = i;
            }
            pos
        };
        for &(u, v) in g.edges() {
            assert!(position[u] < position[v]);
        }
    }

    #[test]
    fn test_topo_order_breaks_ties_by_insertion() {
        // c inserted before a; both are sources
        let g = graph(&["c", "a", "b"], &[("c", "b"), ("a", "b")]);
        assert_eq!(ids(&g, &topo_order(&g)), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_topo_order_is_permutation() {
        let g = graph(&["a", "b", "c", "d", "e"], &[("a", "c"), ("b", "c"), ("c", "d")]);
        let mut order = topo_order(&g);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sources_and_sinks() {
        let g = graph(&["a", "b", "d", "c"], &[("a", "d"), ("b", "d"), ("d", "c")]);
        assert_eq!(ids(&g, &sources(&g)), vec!["a", "b"]);
        assert_eq!(ids(&g, &sinks(&g)), vec!["c"]);
    }

    #[test]
    fn test_isolated_node_is_source_and_sink() {
        let g = graph(&["a"], &[]);
        assert_eq!(sources(&g), vec![0]);
        assert_eq!(sinks(&g), vec![0]);
    }

    #[test]
    fn test_layers_partition() {
        let g = graph(&["a", "b", "d", "c"], &[("a", "d"), ("b", "d"), ("d", "c")]);
        let layered = layers(&g);
        assert_eq!(layered.len(), 3);
        assert_eq!(ids(&g, &layered[0]), vec!["a", "b"]);
        assert_eq!(ids(&g, &layered[1]), vec!["d"]);
        assert_eq!(ids(&g, &layered[2]), vec!["c"]);

        let total: usize = layered.iter().map(|l| l.len()).sum();
        assert_eq!(total, g.len());
    }

    #[test]
    fn test_layers_idempotent() {
        let g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        assert_eq!(layers(&g), layers(&g));
    }

    #[test]
    fn test_layers_empty_graph() {
        assert!(layers(&Graph::new()).is_empty());
    }
}
