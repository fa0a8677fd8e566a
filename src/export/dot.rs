//! DOT format export for Graphviz visualization.
//!
//! Generates Graphviz DOT for rendering a graph's structure as an image.

use crate::graph::{NodeNumber, NumberedGraph};

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            rankdir: "LR".to_string(),
        }
    }
}

/// Export a graph to Graphviz DOT format, labeling nodes by number.
pub fn export_dot<N>(graph: &NumberedGraph<N>) -> String {
    export_dot_styled(graph, DotOptions::default(), |number, _| {
        format!("n{number}")
    })
}

/// Export a graph to Graphviz DOT format with custom layout and labels.
pub fn export_dot_styled<N>(
    graph: &NumberedGraph<N>,
    options: DotOptions,
    label: impl Fn(NodeNumber, &N) -> String,
) -> String {
    let mut output = String::new();

    // Header
    output.push_str("digraph object_graph {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [shape=box];\n\n");

    // Nodes - walk the full number range, skipping retired numbers
    if let Some(max) = graph.max_number() {
        for number in 0..=max {
            if let Some(node) = graph.get_node(number) {
                let text = escape_dot_label(&label(number, node.as_ref()));
                output.push_str(&format!("    n{number} [label=\"{text}\"];\n"));
            }
        }
    }

    output.push('\n');

    // Edges
    if let Some(max) = graph.max_number() {
        for number in 0..=max {
            if let Some(node) = graph.get_node(number) {
                if let Ok(succs) = graph.succ_node_numbers(node) {
                    for &target in succs {
                        output.push_str(&format!("    n{number} -> n{target};\n"));
                    }
                }
            }
        }
    }

    output.push_str("}\n");
    output
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
