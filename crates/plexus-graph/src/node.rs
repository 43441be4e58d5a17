//! Document nodes and their referrer records.
//!
//! Each [`Node`] is an identified element of one document. Nodes do not hold
//! forward edges themselves; named references live in containers. What every
//! node does hold is the reverse record: a referrer *multiset* with one entry
//! per live reference edge pointing at it. Referrer counts, not booleans,
//! gate the reachability cleanup performed by the document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use plexus_types::{NodeId, TreeValue};

/// An element of the document graph.
///
/// A node has a stable identity, a schema `kind`, a plain field payload, and
/// a referrer multiset. An owner that reaches this node through two
/// containers appears twice among the referrers, and each released edge
/// removes exactly one record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier, unique within the document.
    pub id: NodeId,
    /// The node's schema role (e.g. "Project", "Group", "FileReference").
    pub kind: String,
    /// The node's own plain payload, rendered verbatim into tree output.
    pub fields: BTreeMap<String, TreeValue>,
    /// Referrer multiset: one record per live reference edge pointing here.
    pub referrers: Vec<NodeId>,
}

impl Node {
    /// Create a node of the given kind with a fresh id.
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_id(NodeId::new(), kind)
    }

    /// Create a node with an explicit id.
    pub fn with_id(id: NodeId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            fields: BTreeMap::new(),
            referrers: Vec::new(),
        }
    }

    /// Set a field, builder-style.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<TreeValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up a field by key.
    pub fn field(&self, key: &str) -> Option<&TreeValue> {
        self.fields.get(key)
    }

    /// Record one referrer edge from `owner`.
    pub fn add_referrer(&mut self, owner: NodeId) {
        self.referrers.push(owner);
    }

    /// Remove exactly one referrer record for `owner`.
    ///
    /// Returns `true` if a record was removed, `false` if `owner` held no
    /// record on this node.
    pub fn remove_referrer(&mut self, owner: &NodeId) -> bool {
        match self.referrers.iter().position(|r| r == owner) {
            Some(index) => {
                self.referrers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of referrer records held by `owner`.
    pub fn referrer_count(&self, owner: &NodeId) -> usize {
        self.referrers.iter().filter(|r| *r == owner).count()
    }

    /// Returns `true` if no referrer records remain.
    pub fn is_unreferenced(&self) -> bool {
        self.referrers.is_empty()
    }

    /// Render this node into its tree-shaped plain representation.
    ///
    /// Produces a dict of the node's fields plus the intrinsic `identifier`
    /// and `kind` entries. Intrinsic entries win over same-named fields.
    pub fn to_tree(&self) -> TreeValue {
        let mut entries = self.fields.clone();
        entries.insert("identifier".to_string(), TreeValue::from(self.id.to_string()));
        entries.insert("kind".to_string(), TreeValue::from(self.kind.clone()));
        TreeValue::Dict(entries)
    }
}
