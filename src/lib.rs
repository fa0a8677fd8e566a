//! # objgraph
//!
//! An in-memory directed graph of opaque, caller-owned objects, with stable
//! integer node numbering and bidirectional adjacency.
//!
//! ## Core Principles
//!
//! - **Reference identity**: two nodes are the same only if they are the
//!   identical object, never merely equal by value
//! - **Stable numbering**: every node gets a non-negative integer on
//!   insertion; numbers are never reassigned and never reused
//! - **Symmetric adjacency**: predecessors and successors are kept mutually
//!   consistent through every mutation
//! - **All-or-nothing**: a failed operation leaves the graph untouched
//!
//! ## Architecture
//!
//! ```text
//! Interchange Adapter (generic node container + pair relation)
//!     ↓ import / export ↑
//! Numbered Graph Store (arena of numbered slots, sorted adjacency sets)
//!     ↓
//! Export Formats (DOT, JSON — derived views)
//! ```
//!
//! ## Example
//!
//! ```
//! use objgraph::NumberedGraph;
//! use std::rc::Rc;
//!
//! # fn main() -> objgraph::Result<()> {
//! let mut graph = NumberedGraph::new();
//! let caller = Rc::new("main".to_string());
//! let callee = Rc::new("helper".to_string());
//!
//! graph.add_node(caller.clone());
//! graph.add_node(callee.clone());
//! graph.add_edge(&caller, &callee)?;
//!
//! assert_eq!(graph.node_count(), 2);
//! assert!(graph.has_edge(&caller, &callee)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;
pub mod interchange;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::{NodeNumber, Nodes, NumberedGraph};
pub use interchange::GraphExchange;
