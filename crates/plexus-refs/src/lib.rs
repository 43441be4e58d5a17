//! Reference containers for the plexus document model.
//!
//! This crate provides the keyed reference dictionary: a string-keyed
//! collection of node references owned by a single node, which keeps the
//! document's referrer bookkeeping consistent by intercepting every
//! mutation.
//!
//! # Architecture
//!
//! - **Attributes** describe the edge a container represents. Every
//!   dictionary is bound to one attribute, whose validation hook screens
//!   candidate values before anything is committed.
//! - **The dictionary** owns its entry map outright and never exposes it
//!   mutably. All writes pass through [`ReferenceDictionary::set`],
//!   [`ReferenceDictionary::delete`], or
//!   [`ReferenceDictionary::remove_reference`], each of which updates the
//!   affected nodes' referrer multisets within the same call.
//! - **Projections** render the entries either flat (key to node id) or as
//!   a tree (key to the target's nested rendering) for serialization.
//!
//! # Modules
//!
//! - [`error`] — Error types for reference operations
//! - [`attribute`] — The [`RefAttribute`] trait and stock descriptors
//! - [`dictionary`] — The [`ReferenceDictionary`] container

pub mod attribute;
pub mod dictionary;
pub mod error;

pub use attribute::{AnyNodeAttribute, KindAttribute, RefAttribute};
pub use dictionary::ReferenceDictionary;
pub use error::{RefError, Result, ValidationError};
