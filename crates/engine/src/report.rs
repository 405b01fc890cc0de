//! Full analysis report: validate once, then run every engine over the
//! same immutable snapshot.

use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;
use workplan_core::{Graph, GraphError, NodeType};

use crate::order::{layers, sinks, sources, topo_order};
use crate::path::{longest_path, Weighting};
use crate::readiness::{goal_reached, ready, ready_initial};
use crate::score::{recommend, score_table, ScoreRow};

/// Options for a full analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Completion record; enables the progress section of the report
    pub done: Option<HashSet<String>>,
    /// Weighting for the critical path
    pub weighting: Weighting,
}

/// A node paired with its readiness semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeTypeRow {
    /// Node id
    pub id: String,
    /// AND/OR semantics
    pub node_type: NodeType,
}

/// Progress-dependent results, present only when a done set was supplied.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    /// Actionable nodes, insertion order
    pub ready_now: Vec<String>,
    /// Best-scoring actionable node
    pub recommended_next: Option<String>,
    /// Whether every sink is satisfied
    pub goal_reached: bool,
}

/// Everything the analysis derives from one graph snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Deterministic topological order
    pub order: Vec<String>,
    /// Nodes with no prerequisites
    pub sources: Vec<String>,
    /// Nodes with no dependents
    pub sinks: Vec<String>,
    /// Per-node readiness semantics, in topological order
    pub node_types: Vec<NodeTypeRow>,
    /// Ready set before any work has happened
    pub ready_initial: Vec<String>,
    /// Progress section, when a done set was supplied
    pub progress: Option<ProgressReport>,
    /// Parallelizable waves of nodes
    pub layers: Vec<Vec<String>>,
    /// Critical path under the requested weighting
    pub longest_path: Vec<String>,
    /// Impact/effort/score table over the sources
    pub source_scores: Vec<ScoreRow>,
    /// Best-scoring source to start with
    pub recommended_first: Option<String>,
}

/// Validate the graph, then derive the full report.
///
/// Fails only on validation (a cycle; construction already rejected the
/// other structural errors) and never returns a partial result: a wrong
/// plan is worse than no plan.
pub fn analyze(graph: &Graph, options: &AnalyzeOptions) -> Result<Report, GraphError> {
    crate::validate(graph)?;

    let to_ids = |indices: &[usize]| -> Vec<String> {
        indices.iter().map(|&n| graph.id_of(n).to_string()).collect()
    };

    let order = topo_order(graph);
    let source_set = sources(graph);
    let critical = longest_path(graph, &options.weighting);
    debug!(
        nodes = graph.len(),
        edges = graph.edges().len(),
        critical_len = critical.len(),
        "analyzed graph"
    );

    let node_types = order
        .iter()
        .map(|&n| NodeTypeRow {
            id: graph.id_of(n).to_string(),
            node_type: graph.node(n).node_type,
        })
        .collect();

    let progress = options.done.as_ref().map(|done| {
        let ready_now = ready(graph, done);
        let recommended_next =
            recommend(graph, &ready_now, &critical).map(|n| graph.id_of(n).to_string());
        ProgressReport {
            ready_now: to_ids(&ready_now),
            recommended_next,
            goal_reached: goal_reached(graph, done),
        }
    });

    let recommended_first =
        recommend(graph, &source_set, &critical).map(|n| graph.id_of(n).to_string());

    Ok(Report {
        order: to_ids(&order),
        sources: to_ids(&source_set),
        sinks: to_ids(&sinks(graph)),
        node_types,
        ready_initial: to_ids(&ready_initial(graph)),
        progress,
        layers: layers(graph).iter().map(|layer| to_ids(layer)).collect(),
        longest_path: to_ids(&critical),
        source_scores: score_table(graph, &source_set),
        recommended_first,
    })
}
