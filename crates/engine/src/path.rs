//! Critical path: the longest chain of dependent work.

use crate::order::topo_order;
use std::collections::HashMap;
use workplan_core::Graph;

/// How much a node contributes to a path's total.
#[derive(Debug, Clone, Default)]
pub enum Weighting {
    /// Every node counts 1; the longest path is the longest step chain.
    #[default]
    Unweighted,
    /// A node contributes its impact.
    Impact,
    /// Caller-supplied per-node weights; unlisted nodes count 1.
    Custom(HashMap<String, f64>),
}

impl Weighting {
    fn weight_of(&self, graph: &Graph, index: usize) -> f64 {
        match self {
            Weighting::Unweighted => 1.0,
            Weighting::Impact => graph.node(index).impact as f64,
            Weighting::Custom(map) => map.get(graph.id_of(index)).copied().unwrap_or(1.0),
        }
    }
}

/// The heaviest root-to-node chain in the graph, as insertion indices.
///
/// Dynamic program over the topological order: each node's best total is
/// its own weight plus the best total among its predecessors (clamped at
/// zero, so a run of non-positive custom weights never drags a path
/// below the node standing alone). Back-pointers reconstruct the chain.
///
/// Ties - between predecessors and for the global maximum - go to the
/// smallest insertion index, so the result is reproducible. An edgeless
/// graph yields its single heaviest node; an empty graph yields an
/// empty path.
pub fn longest_path(graph: &Graph, weighting: &Weighting) -> Vec<usize> {
    if graph.is_empty() {
        return Vec::new();
    }

    let mut best = vec![0.0f64; graph.len()];
    let mut back: Vec<Option<usize>> = vec![None; graph.len()];

    for &n in &topo_order(graph) {
        let mut best_pred: Option<usize> = None;
        for &p in graph.predecessors(n) {
            let better = match best_pred {
                None => true,
                Some(cur) => best[p] > best[cur] || (best[p] == best[cur] && p < cur),
            };
            if better {
                best_pred = Some(p);
            }
        }
        let carried = best_pred.map(|p| best[p]).unwrap_or(0.0);
        best[n] = weighting.weight_of(graph, n) + carried.max(0.0);
        back[n] = best_pred.filter(|&p| best[p] > 0.0);
    }

    let mut end = 0;
    for n in 1..graph.len() {
        if best[n] > best[end] {
            end = n;
        }
    }

    let mut path = vec![end];
    while let Some(p) = back[path[path.len() - 1]] {
        path.push(p);
    }
    path.reverse();
    path
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
    fn test_unweighted_longest_chain() {
        let g = graph(&["a", "b", "d", "c"], &[("a", "d"), ("b", "d"), ("d", "c")]);
        let path = longest_path(&g, &Weighting::Unweighted);
        // a and b tie as d's predecessor; a wins by insertion order
        assert_eq!(ids(&g, &path), vec!["a", "d", "c"]);
    }

    #[test]
    fn test_path_length_bounded_by_node_count() {
        let g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let path = longest_path(&g, &Weighting::Unweighted);
        assert_eq!(ids(&g, &path), vec!["a", "b", "c"]);
        assert!(path.len() <= g.len());
    }

    #[test]
    fn test_extending_chain_extends_path() {
        let mut g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let before = longest_path(&g, &Weighting::Unweighted).len();
        g.add_node(Node::new("d")).unwrap();
        g.add_edge("c", "d").unwrap();
        let after = longest_path(&g, &Weighting::Unweighted).len();
        assert_eq!(after, before + 1);
    }

    #[test]
    fn test_impact_weighting_prefers_heavy_branch() {
        // Short heavy branch beats long light one.
        let mut g = Graph::new();
        g.add_node(Node::new("a").with_impact(1)).unwrap();
        g.add_node(Node::new("b").with_impact(1)).unwrap();
        g.add_node(Node::new("c").with_impact(1)).unwrap();
        g.add_node(Node::new("heavy").with_impact(10)).unwrap();
        g.add_node(Node::new("end").with_impact(1)).unwrap();
        g.add_edge("a", "b").unwrap();
        g.add_edge("b", "c").unwrap();
        g.add_edge("c", "end").unwrap();
        g.add_edge("heavy", "end").unwrap();

        let unweighted = longest_path(&g, &Weighting::Unweighted);
        assert_eq!(ids(&g, &unweighted), vec!["a", "b", "c", "end"]);

        let weighted = longest_path(&g, &Weighting::Impact);
        assert_eq!(ids(&g, &weighted), vec!["heavy", "end"]);
    }

    #[test]
    fn test_custom_weights_default_to_one() {
        let g = graph(&["a", "b"], &[]);
        let weights = HashMap::from([("b".to_string(), 4.0)]);
        let path = longest_path(&g, &Weighting::Custom(weights));
        assert_eq!(ids(&g, &path), vec!["b"]);
    }

    #[test]
    fn test_edgeless_graph_picks_heaviest_node() {
        let mut g = Graph::new();
        g.add_node(Node::new("a").with_impact(2)).unwrap();
        g.add_node(Node::new("b").with_impact(5)).unwrap();
        let path = longest_path(&g, &Weighting::Impact);
        assert_eq!(ids(&g, &path), vec!["b"]);

        // Unweighted ties break to insertion order.
        let path = longest_path(&g, &Weighting::Unweighted);
        assert_eq!(ids(&g, &path), vec!["a"]);
    }

    #[test]
    fn test_empty_graph() {
        assert!(longest_path(&Graph::new(), &Weighting::Unweighted).is_empty());
    }
}
