//! Export module for visualizing graph structure in external tools.
//!
//! Supported formats:
//! - **DOT**: Graphviz visualization
//! - **JSON**: D3.js and web-based tools
//!
//! Nodes are opaque, so both formats render them by number; callers can
//! supply a label function to attach readable names.

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::{export_json, export_json_labeled};
