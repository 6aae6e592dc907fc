//! Traffic graph construction and serialization.
//!
//! The builder only talks to a [`GraphSink`]; [`TrafficGraph`] is the
//! in-memory sink used by the CLI, and the `graphml` / `gml` modules turn a
//! finished graph into a file the traffic generator can load.
//!
//! ## Graph shape
//!
//! ```text
//! start -> pause_entry -> sync0 -> transfer0_0 -> sync1 -> ... -> syncN -> pause_exit -> start
//!                              \-> transfer0_1 -/
//! ```

pub mod builder;
pub mod gml;
pub mod graphml;
pub mod model;
pub mod output;

pub use builder::{build, build_into, BuildError, GraphSummary};
pub use model::{GraphEdge, GraphNode, TrafficGraph};
pub use output::{write_graph_file, OutputFormat};

/// Node attributes in insertion order
pub type Attributes = Vec<(String, String)>;

/// Id of the single entry node
pub const START_NODE: &str = "start";
/// Id of the jittered pause after start
pub const ENTRY_PAUSE_NODE: &str = "pause_entry";
/// Id of the fixed pause before looping back to start
pub const EXIT_PAUSE_NODE: &str = "pause_exit";

/// Id of the barrier opening burst `index`
pub fn sync_node_id(index: usize) -> String {
    format!("sync{}", index)
}

/// Id of transfer `transfer` within burst `burst`
pub fn transfer_node_id(burst: usize, transfer: usize) -> String {
    format!("transfer{}_{}", burst, transfer)
}

/// Anything that can receive the nodes and edges of a traffic graph
pub trait GraphSink {
    /// Add a node, or merge attributes into an existing node with the same id
    fn add_node(&mut self, id: &str, attributes: Attributes);

    /// Add a directed edge between two node ids
    fn add_edge(&mut self, source: &str, target: &str);
}

/// Role of a node, derived from its id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Start,
    Pause,
    Sync,
    Transfer,
}

impl NodeKind {
    /// Classify a node id produced by the builder
    pub fn of(id: &str) -> Option<Self> {
        if id == START_NODE {
            Some(Self::Start)
        } else if id.starts_with("pause") {
            Some(Self::Pause)
        } else if id.starts_with("sync") {
            Some(Self::Sync)
        } else if id.starts_with("transfer") {
            Some(Self::Transfer)
        } else {
            None
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Start => write!(f, "start"),
            NodeKind::Pause => write!(f, "pause"),
            NodeKind::Sync => write!(f, "sync"),
            NodeKind::Transfer => write!(f, "transfer"),
        }
    }
}
