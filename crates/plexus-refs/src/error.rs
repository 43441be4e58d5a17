//! Error types for reference-container operations.

use thiserror::Error;

use plexus_types::NodeId;

/// The attribute descriptor rejected a value.
///
/// This is the only user-triggerable domain error. It is raised before any
/// entry or referrer mutation, so a rejected insert leaves the dictionary and
/// the document exactly as they were.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("attribute {attribute:?} rejected node {node}: {reason}")]
pub struct ValidationError {
    /// Name of the attribute that rejected the value.
    pub attribute: String,
    /// The rejected node.
    pub node: NodeId,
    /// Why the value was unacceptable.
    pub reason: String,
}

/// Errors that can occur during reference-container operations.
#[derive(Debug, Error)]
pub enum RefError {
    /// The attribute descriptor rejected the inserted value.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The value id does not resolve to a live node in the document.
    #[error("unknown node: {0:?}")]
    UnknownNode(NodeId),
}

/// Convenience type alias for reference-container operations.
pub type Result<T> = std::result::Result<T, RefError>;
