//! In-memory directed graph with string-keyed node attributes.

use std::collections::{HashMap, HashSet};

use super::{Attributes, GraphSink, NodeKind};

/// A node and its attributes
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub attributes: Attributes,
}

impl GraphNode {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::of(&self.id)
    }
}

/// A directed edge between two node ids
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

/// Directed graph that keeps nodes and edges in insertion order.
///
/// Adding an edge twice is a no-op, as in a simple digraph.
#[derive(Debug, Clone, Default)]
pub struct TrafficGraph {
    nodes: Vec<GraphNode>,
    index: HashMap<String, usize>,
    edges: Vec<GraphEdge>,
    edge_set: HashSet<GraphEdge>,
}

impl TrafficGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn attribute(&self, id: &str, key: &str) -> Option<&str> {
        self.node(id)?.attribute(key)
    }

    /// Position of a node in insertion order
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn successors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .iter()
            .filter(move |edge| edge.source == id)
            .map(|edge| edge.target.as_str())
    }

    pub fn predecessors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .iter()
            .filter(move |edge| edge.target == id)
            .map(|edge| edge.source.as_str())
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.predecessors(id).count()
    }

    pub fn out_degree(&self, id: &str) -> usize {
        self.successors(id).count()
    }

    /// Nodes of one kind, in insertion order
    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(move |node| node.kind() == Some(kind))
    }

    /// Check that every edge references existing nodes and that a graph with
    /// several nodes is connected by at least one edge
    pub fn validate(&self) -> Result<(), String> {
        for edge in &self.edges {
            if !self.contains_node(&edge.source) {
                return Err(format!("Edge references non-existent source node: {}", edge.source));
            }
            if !self.contains_node(&edge.target) {
                return Err(format!("Edge references non-existent target node: {}", edge.target));
            }
        }

        if self.nodes.len() > 1 && self.edges.is_empty() {
            return Err("Graph has multiple nodes but no edges".to_string());
        }

        Ok(())
    }
}

impl GraphSink for TrafficGraph {
    fn add_node(&mut self, id: &str, attributes: Attributes) {
        match self.index.get(id) {
            Some(&i) => {
                let node = &mut self.nodes[i];
                for (key, value) in attributes {
                    match node.attributes.iter_mut().find(|entry| entry.0 == key) {
                        Some(existing) => existing.1 = value,
                        None => node.attributes.push((key, value)),
                    }
                }
            }
            None => {
                self.index.insert(id.to_string(), self.nodes.len());
                self.nodes.push(GraphNode {
                    id: id.to_string(),
                    attributes,
                });
            }
        }
    }

    fn add_edge(&mut self, source: &str, target: &str) {
        let edge = GraphEdge {
            source: source.to_string(),
            target: target.to_string(),
        };
        if self.edge_set.insert(edge.clone()) {
            self.edges.push(edge);
        }
    }
}
