//! Error types for the document graph.

use plexus_types::NodeId;

/// Errors that can occur during document operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Attempted to insert a node with an id that already exists.
    #[error("duplicate node: {0:?}")]
    DuplicateNode(NodeId),

    /// A referenced node was not found in the document.
    #[error("unknown node: {0:?}")]
    UnknownNode(NodeId),
}

/// Convenience alias for document results.
pub type GraphResult<T> = Result<T, GraphError>;
