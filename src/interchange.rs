//! Conversion between a [`NumberedGraph`] and the generic interchange model.
//!
//! The interchange model is the boundary for systems that only understand a
//! generic object graph: an ordered container of opaque node objects plus a
//! relation of ordered pairs over those objects. [`import`] builds a fresh
//! store from such a value; [`export`] snapshots a store back into one.

use crate::error::{GraphError, Result};
use crate::graph::NumberedGraph;
use log::debug;
use std::rc::Rc;

/// A generic object-graph interchange value.
///
/// Duplicates in `nodes` are not meaningful (the store de-duplicates by
/// identity on import); pair endpoints must be objects from `nodes`.
pub struct GraphExchange<N> {
    /// Node container: opaque node references, in order.
    pub nodes: Vec<Rc<N>>,
    /// Pair relation: ordered (x, y) pairs over the node container.
    pub pairs: Vec<(Rc<N>, Rc<N>)>,
}

impl<N> Default for GraphExchange<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> GraphExchange<N> {
    /// Create an empty interchange value.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            pairs: Vec::new(),
        }
    }

    /// Append a node to the container.
    pub fn add_node(&mut self, node: Rc<N>) {
        self.nodes.push(node);
    }

    /// Append an ordered pair to the relation.
    pub fn add_pair(&mut self, x: Rc<N>, y: Rc<N>) {
        self.pairs.push((x, y));
    }
}

/// Build a fresh [`NumberedGraph`] from an interchange value.
///
/// All nodes are added first, in container order (so numbering follows that
/// order), then all pairs as edges, in relation order.
///
/// # Errors
///
/// Returns [`GraphError::InvalidArgument`] if the exchange handle is absent,
/// and [`GraphError::UnknownNode`] if a pair endpoint is not among the
/// imported nodes (a defect in the source data).
pub fn import<N>(exchange: Option<&GraphExchange<N>>) -> Result<NumberedGraph<N>> {
    let exchange =
        exchange.ok_or_else(|| GraphError::invalid_argument("exchange graph is required"))?;

    debug!(
        "Importing exchange graph: {} nodes, {} pairs",
        exchange.nodes.len(),
        exchange.pairs.len()
    );

    let mut graph = NumberedGraph::new();
    for node in &exchange.nodes {
        graph.add_node(node.clone());
    }
    for (x, y) in &exchange.pairs {
        graph.add_edge(x, y)?;
    }

    Ok(graph)
}

/// Snapshot a [`NumberedGraph`] into a fresh interchange value.
///
/// Nodes appear in the store's default iteration order; pairs follow the
/// store's edge enumeration (node order crossed with successor order).
pub fn export<N>(graph: &NumberedGraph<N>) -> GraphExchange<N> {
    let mut exchange = GraphExchange::new();

    for node in graph {
        exchange.add_node(node.clone());
    }
    for (x, y) in graph.edges() {
        exchange.add_pair(x.clone(), y.clone());
    }

    debug!(
        "Exported graph: {} nodes, {} pairs",
        exchange.nodes.len(),
        exchange.pairs.len()
    );
    exchange
}
