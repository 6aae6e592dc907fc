//! GML serialization.
//!
//! GML wants integer node ids, so nodes are numbered in insertion order and
//! the builder's id is written as the `label`.

use super::TrafficGraph;

/// GML strings cannot contain a double quote
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "&quot;"))
}

/// Render a graph as a GML document
pub fn to_gml_string(graph: &TrafficGraph) -> String {
    let mut gml_content = String::new();
    gml_content.push_str("graph [\n");
    gml_content.push_str("  directed 1\n");

    for (id, node) in graph.nodes().iter().enumerate() {
        gml_content.push_str("  node [\n");
        gml_content.push_str(&format!("    id {}\n", id));
        gml_content.push_str(&format!("    label {}\n", quote(&node.id)));
        for (key, value) in &node.attributes {
            gml_content.push_str(&format!("    {} {}\n", key, quote(value)));
        }
        gml_content.push_str("  ]\n");
    }

    for edge in graph.edges() {
        // Edges are only added between known nodes by the builder
        if let (Some(source), Some(target)) =
            (graph.node_index(&edge.source), graph.node_index(&edge.target))
        {
            gml_content.push_str("  edge [\n");
            gml_content.push_str(&format!("    source {}\n", source));
            gml_content.push_str(&format!("    target {}\n", target));
            gml_content.push_str("  ]\n");
        }
    }

    gml_content.push_str("]\n");
    gml_content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Attributes, GraphSink};

    #[test]
    fn test_gml_output() {
        let mut graph = TrafficGraph::new();
        graph.add_node("start", vec![("peers".to_string(), "server1:443".to_string())]);
        graph.add_node("sync0", Attributes::new());
        graph.add_edge("start", "sync0");

        let gml = to_gml_string(&graph);
        assert!(gml.starts_with("graph [\n  directed 1\n"));
        assert!(gml.contains("  node [\n    id 0\n    label \"start\"\n    peers \"server1:443\"\n  ]\n"));
        assert!(gml.contains("  node [\n    id 1\n    label \"sync0\"\n  ]\n"));
        assert!(gml.contains("  edge [\n    source 0\n    target 1\n  ]\n"));
        assert!(gml.ends_with("]\n"));
    }

    #[test]
    fn test_quotes_are_escaped() {
        assert_eq!(quote("a\"b"), "\"a&quot;b\"");
    }
}
