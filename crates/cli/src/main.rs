//! Workplan CLI - analyze a dependency graph of work items and derive an
//! execution plan: a valid order, parallel waves, the critical path, and
//! a recommended next action.
//!
//! Reads the JSON input record from a file or stdin, prints a sectioned
//! text report (or JSON with `--json`), and exits non-zero when the
//! graph fails validation.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read as _;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use workplan_core::{BuildOptions, GraphSpec};
use workplan_engine::{analyze, AnalyzeOptions, Report, Weighting};

#[derive(Parser)]
#[command(name = "workplan")]
#[command(about = "Dependency-graph analysis and next-action planning", long_about = None)]
struct Cli {
    /// Input JSON file; reads stdin when absent
    path: Option<PathBuf>,

    /// Emit the report as JSON instead of sectioned text
    #[arg(long)]
    json: bool,

    /// Reject non-positive impact weights
    #[arg(long)]
    strict_weights: bool,

    /// Weight the critical path by impact instead of step count
    #[arg(long)]
    weighted: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let input = match &cli.path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let spec: GraphSpec = serde_json::from_str(&input).context("parsing input record")?;
    let graph = spec.build(&BuildOptions {
        strict_weights: cli.strict_weights,
    })?;
    debug!(nodes = graph.len(), edges = graph.edges().len(), "built graph");

    let options = AnalyzeOptions {
        done: spec.done_set(),
        weighting: if cli.weighted {
            Weighting::Impact
        } else {
            Weighting::Unweighted
        },
    };
    let report = analyze(&graph, &options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&report));
    }
    Ok(())
}

/// Format the report as the sectioned text layout.
///
/// Ready sets and layer members print lexicographically sorted; every
/// other list keeps the engine's deterministic order. Recommendation
/// sections print an empty line when there is no candidate.
fn render(report: &Report) -> String {
    let mut out = String::new();
    let mut section = |title: &str, lines: &[String]| {
        out.push_str(title);
        out.push('\n');
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
    };

    section("TOPOLOGICAL_ORDER", &report.order);
    section("SOURCES", &report.sources);
    section("SINKS", &report.sinks);
    section(
        "NODE_TYPES",
        &report
            .node_types
            .iter()
            .map(|row| format!("{}\t{}", row.id, row.node_type.as_str()))
            .collect::<Vec<_>>(),
    );
    section("READY_INITIAL", &sorted(&report.ready_initial));

    if let Some(progress) = &report.progress {
        section("READY_NOW", &sorted(&progress.ready_now));
        section(
            "RECOMMENDED_NEXT",
            &[progress.recommended_next.clone().unwrap_or_default()],
        );
        section(
            "GOAL_REACHED",
            &[if progress.goal_reached { "yes" } else { "no" }.to_string()],
        );
    }

    section(
        "LAYERS",
        &report
            .layers
            .iter()
            .enumerate()
            .map(|(i, layer)| format!("layer_{}\t{}", i, sorted(layer).join("\t")))
            .collect::<Vec<_>>(),
    );
    section("LONGEST_PATH", &report.longest_path);
    section(
        "SOURCE_SCORES",
        &report
            .source_scores
            .iter()
            .map(|row| {
                format!(
                    "{}\timpact={}\teffort={}\tscore={:.2}",
                    row.id, row.impact, row.effort, row.score
                )
            })
            .collect::<Vec<_>>(),
    );
    section(
        "RECOMMENDED_FIRST",
        &[report.recommended_first.clone().unwrap_or_default()],
    );

    out
}

fn sorted(ids: &[String]) -> Vec<String> {
    let mut ids = ids.to_vec();
    ids.sort();
    ids
}
