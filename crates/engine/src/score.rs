//! Impact/effort scoring and next-action recommendation.

use serde::Serialize;
use std::collections::HashSet;
use workplan_core::Graph;

/// Priority score: impact divided by effort. Effort below 1 counts as 1.
pub fn score(impact: i64, effort: i64) -> f64 {
    impact as f64 / effort.max(1) as f64
}

/// One scored candidate, for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    /// Node id
    pub id: String,
    /// Impact weight
    pub impact: i64,
    /// Effort weight
    pub effort: i64,
    /// impact / max(effort, 1)
    pub score: f64,
}

/// Score every candidate, keeping the candidates' order.
pub fn score_table(graph: &Graph, candidates: &[usize]) -> Vec<ScoreRow> {
    candidates
        .iter()
        .map(|&n| {
            let node = graph.node(n);
            ScoreRow {
                id: node.id.clone(),
                impact: node.impact,
                effort: node.effort,
                score: score(node.impact, node.effort),
            }
        })
        .collect()
}

/// Pick the single best candidate by score.
///
/// Ties prefer a candidate lying on the critical path, then the smallest
/// insertion index. Returns `None` for an empty candidate set.
pub fn recommend(graph: &Graph, candidates: &[usize], critical_path: &[usize]) -> Option<usize> {
    let on_path: HashSet<usize> = critical_path.iter().copied().collect();

    let mut best: Option<(usize, f64)> = None;
    for &n in candidates {
        let node = graph.node(n);
        let s = score(node.impact, node.effort);
        let better = match best {
            None => true,
            Some((cur, cur_s)) => {
                s > cur_s
                    || (s == cur_s && on_path.contains(&n) && !on_path.contains(&cur))
                    || (s == cur_s
                        && on_path.contains(&n) == on_path.contains(&cur)
                        && n < cur)
            }
        };
        if better {
            best = Some((n, s));
        }
    }
    best.map(|(n, _)| n)
}
