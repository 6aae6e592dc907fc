//! GraphML serialization.
//!
//! Every node attribute becomes a `<key>` of type string, numbered `d0`,
//! `d1`, ... in order of first appearance. Nodes and edges are written in
//! insertion order so the same graph always produces the same file.

use super::TrafficGraph;

const GRAPHML_HEADER: &str = concat!(
    "<?xml version='1.0' encoding='utf-8'?>\n",
    "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\" ",
    "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" ",
    "xsi:schemaLocation=\"http://graphml.graphdrawing.org/xmlns ",
    "http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd\">\n",
);

/// Escape text for use in XML content and attribute values
pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Attribute names in order of first appearance across all nodes
fn attribute_keys(graph: &TrafficGraph) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::new();
    for node in graph.nodes() {
        for (key, _) in &node.attributes {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
    }
    keys
}

/// Render a graph as a GraphML document
pub fn to_graphml_string(graph: &TrafficGraph) -> String {
    let keys = attribute_keys(graph);
    let key_id = |name: &str| {
        keys.iter()
            .position(|key| *key == name)
            .map(|i| format!("d{}", i))
            .unwrap_or_default()
    };

    let mut content = String::from(GRAPHML_HEADER);

    for (i, key) in keys.iter().enumerate() {
        content.push_str(&format!(
            "  <key id=\"d{}\" for=\"node\" attr.name=\"{}\" attr.type=\"string\" />\n",
            i,
            escape_xml(key)
        ));
    }

    content.push_str("  <graph edgedefault=\"directed\">\n");

    for node in graph.nodes() {
        if node.attributes.is_empty() {
            content.push_str(&format!("    <node id=\"{}\" />\n", escape_xml(&node.id)));
            continue;
        }
        content.push_str(&format!("    <node id=\"{}\">\n", escape_xml(&node.id)));
        for (key, value) in &node.attributes {
            content.push_str(&format!(
                "      <data key=\"{}\">{}</data>\n",
                key_id(key),
                escape_xml(value)
            ));
        }
        content.push_str("    </node>\n");
    }

    for edge in graph.edges() {
        content.push_str(&format!(
            "    <edge source=\"{}\" target=\"{}\" />\n",
            escape_xml(&edge.source),
            escape_xml(&edge.target)
        ));
    }

    content.push_str("  </graph>\n</graphml>\n");
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Attributes, GraphSink};

    fn sample_graph() -> TrafficGraph {
        let mut graph = TrafficGraph::new();
        graph.add_node(
            "start",
            vec![
                ("serverport".to_string(), "443".to_string()),
                ("peers".to_string(), "server1:443".to_string()),
            ],
        );
        graph.add_node("sync0", Attributes::new());
        graph.add_node("pause_exit", vec![("time".to_string(), "60".to_string())]);
        graph.add_edge("start", "sync0");
        graph.add_edge("sync0", "pause_exit");
        graph
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(escape_xml("3 KiB"), "3 KiB");
    }

    #[test]
    fn test_keys_declared_once_in_order() {
        let xml = to_graphml_string(&sample_graph());
        assert!(xml.contains("<key id=\"d0\" for=\"node\" attr.name=\"serverport\" attr.type=\"string\" />"));
        assert!(xml.contains("<key id=\"d1\" for=\"node\" attr.name=\"peers\" attr.type=\"string\" />"));
        assert!(xml.contains("<key id=\"d2\" for=\"node\" attr.name=\"time\" attr.type=\"string\" />"));
        assert_eq!(xml.matches("<key ").count(), 3);
    }

    #[test]
    fn test_nodes_and_edges() {
        let xml = to_graphml_string(&sample_graph());
        assert!(xml.starts_with("<?xml version='1.0' encoding='utf-8'?>"));
        assert!(xml.contains("<graph edgedefault=\"directed\">"));
        assert!(xml.contains("<node id=\"start\">\n      <data key=\"d0\">443</data>\n      <data key=\"d1\">server1:443</data>\n    </node>"));
        assert!(xml.contains("<node id=\"sync0\" />"));
        assert!(xml.contains("<data key=\"d2\">60</data>"));
        assert!(xml.contains("<edge source=\"start\" target=\"sync0\" />"));
        assert!(xml.contains("<edge source=\"sync0\" target=\"pause_exit\" />"));
        assert!(xml.trim_end().ends_with("</graphml>"));
    }

    #[test]
    fn test_output_is_deterministic() {
        assert_eq!(to_graphml_string(&sample_graph()), to_graphml_string(&sample_graph()));
    }
}
