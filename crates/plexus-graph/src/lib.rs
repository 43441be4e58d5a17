//! Mutable in-memory document graph for the plexus document model.
//!
//! Holds the nodes of one structured document, mediates the referrer
//! bookkeeping behind every reference edge, and evicts nodes that lose their
//! last referrer. Reference containers hold node ids rather than nodes and
//! route every update through [`Document`].

pub mod document;
pub mod error;
pub mod node;

pub use document::Document;
pub use error::{GraphError, GraphResult};
pub use node::Node;
