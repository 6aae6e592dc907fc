//! Conversion orchestrator.
//!
//! Runs the stages in order (decode, segment, build, write) and tags any
//! failure with the stage it came from. A run either writes one complete
//! graph or writes nothing.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Report, WrapErr};
use color_eyre::Result;
use log::info;

use crate::burst::{segment_trimmed, Burst};
use crate::config::{GraphConfig, ServerEndpoint};
use crate::graph::{build_into, write_graph_file, BuildError, GraphSummary, OutputFormat, TrafficGraph};
use crate::har::{load_trace, Trace};

/// Everything needed for one conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    pub trace_path: PathBuf,
    pub endpoint: ServerEndpoint,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub config: GraphConfig,
}

/// Segment a decoded trace into trimmed bursts
pub fn segment_trace(trace: &Trace) -> Vec<Burst> {
    let bursts = segment_trimmed(trace.records.iter().copied());
    info!("Segmented {} transfers into {} bursts", trace.records.len(), bursts.len());
    bursts
}

/// Build the traffic graph for already segmented bursts
pub fn bursts_to_graph(
    bursts: &[Burst],
    endpoint: &ServerEndpoint,
    config: &GraphConfig,
) -> Result<(TrafficGraph, GraphSummary), BuildError> {
    let mut graph = TrafficGraph::new();
    let summary = build_into(bursts, endpoint, config, &mut graph)?;
    Ok((graph, summary))
}

/// Segment a decoded trace and build its traffic graph
pub fn trace_to_graph(
    trace: &Trace,
    endpoint: &ServerEndpoint,
    config: &GraphConfig,
) -> Result<(TrafficGraph, GraphSummary), BuildError> {
    bursts_to_graph(&segment_trace(trace), endpoint, config)
}

/// Convert the trace at `conversion.trace_path` and write the graph file
pub fn run(conversion: &Conversion) -> Result<GraphSummary> {
    let trace = load_trace(&conversion.trace_path).wrap_err_with(|| {
        format!("Failed to decode trace '{}'", conversion.trace_path.display())
    })?;

    let bursts = segment_trace(&trace);
    if bursts.is_empty() {
        return Err(Report::new(BuildError::EmptySegmentation)
            .wrap_err("Failed to segment trace: no usable transfers"));
    }

    let (graph, summary) = bursts_to_graph(&bursts, &conversion.endpoint, &conversion.config)
        .wrap_err("Failed to build traffic graph")?;

    write_graph_file(&graph, conversion.format, &conversion.output_path)
        .wrap_err("Failed to write graph")?;

    Ok(summary)
}

/// Output format to use: the explicit choice, or one inferred from `output_path`
pub fn resolve_format(explicit: Option<OutputFormat>, output_path: &Path) -> OutputFormat {
    explicit.unwrap_or_else(|| OutputFormat::from_path(output_path))
}
