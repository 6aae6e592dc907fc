//! Traffic graph synthesis from a burst sequence.

use log::info;

use super::{
    sync_node_id, transfer_node_id, Attributes, GraphSink, TrafficGraph, ENTRY_PAUSE_NODE,
    EXIT_PAUSE_NODE, START_NODE,
};
use crate::burst::Burst;
use crate::config::{GraphConfig, ServerEndpoint, ValidationError};
use crate::utils::size::{format_kib, round_kib};

/// Errors that can occur while building a traffic graph
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("No usable transfers: the trace produced no bursts")]
    EmptySegmentation,

    #[error(transparent)]
    InvalidConfig(#[from] ValidationError),
}

/// Counts reported after a successful build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphSummary {
    pub bursts: usize,
    pub transfers: usize,
    /// Sum of the rounded transfer sizes
    pub total_kib: u64,
}

fn attributes<const N: usize>(pairs: [(&str, String); N]) -> Attributes {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Emit the traffic graph for `bursts` into `sink`.
///
/// `bursts` must already be trimmed of leading empty bursts. Nothing is
/// written to the sink when the sequence is empty or the config is invalid.
pub fn build_into<S: GraphSink>(
    bursts: &[Burst],
    endpoint: &ServerEndpoint,
    config: &GraphConfig,
    sink: &mut S,
) -> Result<GraphSummary, BuildError> {
    if bursts.is_empty() {
        return Err(BuildError::EmptySegmentation);
    }

    config.validate()?;
    let entry_pause = config
        .entry_pause_seconds()?
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let exit_pause = config.exit_pause_seconds()?.to_string();

    sink.add_node(
        START_NODE,
        attributes([
            ("serverport", endpoint.port.to_string()),
            ("peers", endpoint.peers()),
        ]),
    );
    sink.add_node(ENTRY_PAUSE_NODE, attributes([("time", entry_pause)]));
    sink.add_edge(START_NODE, ENTRY_PAUSE_NODE);

    let mut opening = sync_node_id(0);
    sink.add_node(&opening, Attributes::new());
    sink.add_edge(ENTRY_PAUSE_NODE, &opening);

    let mut summary = GraphSummary::default();

    // Transfers of a burst fan out from its opening barrier and join at the closing one
    for (i, burst) in bursts.iter().enumerate() {
        let closing = sync_node_id(i + 1);
        sink.add_node(&closing, Attributes::new());

        for (j, record) in burst.records().iter().enumerate() {
            let transfer = transfer_node_id(i, j);
            sink.add_node(
                &transfer,
                attributes([
                    ("type", config.transfer_type.clone()),
                    ("protocol", config.protocol.clone()),
                    ("size", format_kib(record.size_kib)),
                ]),
            );
            sink.add_edge(&opening, &transfer);
            sink.add_edge(&transfer, &closing);

            summary.transfers += 1;
            summary.total_kib += round_kib(record.size_kib);
        }

        summary.bursts += 1;
        opening = closing;
    }

    sink.add_node(EXIT_PAUSE_NODE, attributes([("time", exit_pause)]));
    sink.add_edge(&opening, EXIT_PAUSE_NODE);
    sink.add_edge(EXIT_PAUSE_NODE, START_NODE);

    info!(
        "Built traffic graph: {} bursts, {} transfers, {} KiB total",
        summary.bursts, summary.transfers, summary.total_kib
    );

    Ok(summary)
}

/// Build an in-memory traffic graph for `bursts`
pub fn build(
    bursts: &[Burst],
    endpoint: &ServerEndpoint,
    config: &GraphConfig,
) -> Result<TrafficGraph, BuildError> {
    let mut graph = TrafficGraph::new();
    build_into(bursts, endpoint, config, &mut graph)?;
    Ok(graph)
}
