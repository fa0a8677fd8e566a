//! Error types for objgraph operations.
//!
//! All fallible operations return [`Result<T>`] and fail before making any
//! observable change to the graph.

use thiserror::Error;

/// Result type alias for objgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph operations.
///
/// Every mutating operation either completes fully or fails with one of these
/// kinds before touching any state; there is no partial-mutation mode.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node argument (or an edge endpoint) is not currently present in the
    /// store. Nodes are opaque, so they are reported by address.
    #[error("Unknown node: {node}")]
    UnknownNode {
        /// Address of the missing node object
        node: String,
    },

    /// A required argument (e.g., the source of an import) was absent.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was missing or malformed
        message: String,
    },
}

impl GraphError {
    /// Create an unknown-node error from a rendered node handle.
    pub fn unknown_node(node: impl Into<String>) -> Self {
        Self::UnknownNode { node: node.into() }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
