//! Foundation types for the plexus document model.
//!
//! This crate provides the identifier and plain-value types used throughout
//! the plexus workspace. Every other plexus crate depends on `plexus-types`.
//!
//! # Key Types
//!
//! - [`NodeId`] — Stable node identifier (UUID v7 for time-ordering)
//! - [`TreeValue`] — Plain tree-shaped value consumed by external encoders
//! - [`TypeError`] — Parse-level errors

pub mod error;
pub mod id;
pub mod tree;

pub use error::TypeError;
pub use id::NodeId;
pub use tree::TreeValue;
