//! Workplan analysis engine.
//!
//! Pure functions over a validated [`workplan_core::Graph`] snapshot:
//! cycle detection, deterministic topological ordering, layering into
//! parallelizable waves, critical-path computation, AND/OR readiness
//! propagation, and impact/effort scoring.
//!
//! Every analysis is a bounded O(V+E) traversal with no shared state;
//! [`validate`] must succeed before the other functions are called, and
//! [`analyze`] enforces that ordering itself.

pub mod order;
pub mod path;
pub mod readiness;
pub mod report;
pub mod score;
pub mod validate;

pub use order::{layers, sinks, sources, topo_order};
pub use path::{longest_path, Weighting};
pub use readiness::{goal_reached, ready, ready_initial, satisfied};
pub use report::{analyze, AnalyzeOptions, NodeTypeRow, ProgressReport, Report};
pub use score::{recommend, score, score_table, ScoreRow};
pub use validate::validate;
