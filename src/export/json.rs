//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts. Node ids are the store's node numbers.

use crate::graph::{NodeNumber, NumberedGraph};
use serde::Serialize;

#[derive(Serialize)]
struct JsonNode {
    id: NodeNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

#[derive(Serialize)]
struct JsonLink {
    source: NodeNumber,
    target: NodeNumber,
}

#[derive(Serialize)]
struct JsonGraph {
    nodes: Vec<JsonNode>,
    links: Vec<JsonLink>,
}

/// Export a graph to D3.js-compatible JSON, identifying nodes by number.
pub fn export_json<N>(graph: &NumberedGraph<N>) -> String {
    render(collect(graph, None::<fn(NodeNumber, &N) -> String>))
}

/// Export a graph to D3.js-compatible JSON with caller-supplied node labels.
pub fn export_json_labeled<N>(
    graph: &NumberedGraph<N>,
    label: impl Fn(NodeNumber, &N) -> String,
) -> String {
    render(collect(graph, Some(label)))
}

fn collect<N>(
    graph: &NumberedGraph<N>,
    label: Option<impl Fn(NodeNumber, &N) -> String>,
) -> JsonGraph {
    let mut nodes = Vec::with_capacity(graph.node_count());
    let mut links = Vec::with_capacity(graph.edge_count());

    if let Some(max) = graph.max_number() {
        for number in 0..=max {
            if let Some(node) = graph.get_node(number) {
                nodes.push(JsonNode {
                    id: number,
                    label: label.as_ref().map(|f| f(number, node.as_ref())),
                });

                if let Ok(succs) = graph.succ_node_numbers(node) {
                    for &target in succs {
                        links.push(JsonLink {
                            source: number,
                            target,
                        });
                    }
                }
            }
        }
    }

    JsonGraph { nodes, links }
}

fn render(doc: JsonGraph) -> String {
    // serde_json::to_string_pretty cannot fail for these plain structs
    serde_json::to_string_pretty(&doc).expect("Failed to serialize JSON")
}
