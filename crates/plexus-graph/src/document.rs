//! The document registry owning every node of one document.
//!
//! [`Document`] stores nodes in a [`HashMap`] keyed by [`NodeId`] and
//! mediates all referrer updates. Containers never hold nodes directly; they
//! hold ids and go through the document for every read and every referrer
//! change.
//!
//! # Invariants
//!
//! - Node ids are unique within the document.
//! - A node whose referrer multiset empties is evicted, unless it is the
//!   designated root.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use plexus_types::{NodeId, TreeValue};

use crate::error::{GraphError, GraphResult};
use crate::node::Node;

/// A mutable in-memory document graph.
///
/// Exactly one `Document` owns every node of one document. Node lifetime is
/// referrer-driven: [`remove_referrer`] evicts a node whose last record is
/// released, with the designated root exempt.
///
/// [`remove_referrer`]: Document::remove_referrer
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Document {
    /// All live nodes, keyed by their id.
    nodes: HashMap<NodeId, Node>,
    /// The document root, exempt from eviction.
    root: Option<NodeId>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ---------------------------------------------------------------
    // Registry
    // ---------------------------------------------------------------

    /// Insert a node, returning its id.
    ///
    /// Returns an error if a node with the same id already exists. Inserted
    /// nodes start out unreferenced and are not evicted until a referrer
    /// record is added and released again.
    pub fn insert_node(&mut self, node: Node) -> GraphResult<NodeId> {
        let id = node.id;
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        debug!(node = %id.short_id(), kind = %node.kind, "inserted node");
        self.nodes.insert(id, node);
        Ok(id)
    }

    /// Retrieve a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Retrieve a node mutably by id.
    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Returns `true` if a node with this id is live.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate over all live nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    // ---------------------------------------------------------------
    // Root
    // ---------------------------------------------------------------

    /// Designate the document root.
    ///
    /// The root is never evicted, even with an empty referrer multiset.
    pub fn set_root(&mut self, id: NodeId) -> GraphResult<()> {
        if !self.nodes.contains_key(&id) {
            return Err(GraphError::UnknownNode(id));
        }
        self.root = Some(id);
        Ok(())
    }

    /// The designated root, if one has been set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    // ---------------------------------------------------------------
    // Referrer bookkeeping
    // ---------------------------------------------------------------

    /// Record one referrer edge from `owner` on `target`.
    ///
    /// Returns `false` if the target is not in the document.
    pub fn add_referrer(&mut self, target: &NodeId, owner: NodeId) -> bool {
        match self.nodes.get_mut(target) {
            Some(node) => {
                node.add_referrer(owner);
                debug!(
                    node = %target.short_id(),
                    owner = %owner.short_id(),
                    "added referrer"
                );
                true
            }
            None => false,
        }
    }

    /// Remove one referrer record for `owner` from `target`.
    ///
    /// When the removal empties the target's multiset and the target is not
    /// the document root, the target is evicted. Returns `false` if the
    /// target is missing or held no record for `owner`.
    pub fn remove_referrer(&mut self, target: &NodeId, owner: &NodeId) -> bool {
        let Some(node) = self.nodes.get_mut(target) else {
            return false;
        };
        let removed = node.remove_referrer(owner);
        if removed && node.is_unreferenced() && self.root != Some(*target) {
            self.nodes.remove(target);
            debug!(node = %target.short_id(), "evicted unreferenced node");
        }
        removed
    }

    // ---------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------

    /// Render a node into its tree representation.
    pub fn tree_of(&self, id: &NodeId) -> Option<TreeValue> {
        self.nodes.get(id).map(Node::to_tree)
    }
}
