//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`NodeNumber`]: Stable integer identifier for a node
//! - [`NumberedGraph`]: The numbered, bidirectionally-indexed graph store

mod numbered;

pub use numbered::{NodeNumber, Nodes, NumberedGraph};
