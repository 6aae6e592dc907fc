//! Writing a finished graph to disk.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;

use super::gml::to_gml_string;
use super::graphml::to_graphml_string;
use super::TrafficGraph;

/// Serialization format of the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// GraphML, as read by the traffic generator
    Graphml,
    /// Graph Modelling Language
    Gml,
}

impl OutputFormat {
    /// Pick a format from the output file extension, defaulting to GraphML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gml") => Self::Gml,
            _ => Self::Graphml,
        }
    }

    /// Render `graph` in this format
    pub fn render(self, graph: &TrafficGraph) -> String {
        match self {
            Self::Graphml => to_graphml_string(graph),
            Self::Gml => to_gml_string(graph),
        }
    }
}

/// Validate `graph` and write it to `path`
pub fn write_graph_file(graph: &TrafficGraph, format: OutputFormat, path: &Path) -> Result<()> {
    graph
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Refusing to write invalid graph: {}", e))?;

    fs::write(path, format.render(graph))
        .wrap_err_with(|| format!("Failed to write graph file '{}'", path.display()))?;

    info!(
        "Wrote {:?} graph with {} nodes and {} edges to {:?}",
        format,
        graph.node_count(),
        graph.edge_count(),
        path
    );
    Ok(())
}
