//! The keyed reference container with intercepted mutation.
//!
//! [`ReferenceDictionary`] maps string keys to node ids while keeping the
//! document's referrer bookkeeping consistent: every mutating operation
//! updates the affected nodes' referrer multisets within the same call. The
//! entry map is private and never handed out, so no mutation path can bypass
//! the bookkeeping.
//!
//! # Invariants
//!
//! - For every entry whose target is live, the owner holds one referrer
//!   record on the target per entry pointing at it.
//! - Validation precedes mutation: a rejected insert changes nothing.
//! - Releasing an entry removes exactly one referrer record, never more.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use plexus_graph::Document;
use plexus_types::{NodeId, TreeValue};

use crate::attribute::RefAttribute;
use crate::error::{RefError, Result};

/// A keyed collection of node references, owned by exactly one node.
///
/// The dictionary is created empty, bound to its owner and attribute for its
/// entire life. Mutations take the [`Document`] explicitly so referrer
/// updates on the affected nodes happen synchronously within the call; reads
/// and projections carry no side effects.
pub struct ReferenceDictionary {
    /// The node this dictionary belongs to. Set at construction, immutable.
    owner: NodeId,
    /// The attribute descriptor validating inserted values.
    attribute: Box<dyn RefAttribute>,
    /// The underlying entry map. Never exposed mutably.
    entries: BTreeMap<String, NodeId>,
}

impl ReferenceDictionary {
    /// Create an empty dictionary owned by `owner` and bound to `attribute`.
    pub fn new(owner: NodeId, attribute: Box<dyn RefAttribute>) -> Self {
        Self {
            owner,
            attribute,
            entries: BTreeMap::new(),
        }
    }

    /// The owning node's id.
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    /// The bound attribute descriptor.
    pub fn attribute(&self) -> &dyn RefAttribute {
        self.attribute.as_ref()
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Set `key` to `value`, or clear the key when `value` is `None`.
    ///
    /// A non-null value must resolve to a live node and pass the attribute's
    /// validation; both checks run before anything is mutated, so a failed
    /// `set` leaves the dictionary and all referrer counts untouched. On
    /// success the owner is registered as a referrer of the new value, the
    /// entry is committed, and the referrer edge of a displaced prior value
    /// is released. Registering before releasing keeps an overwrite by the
    /// same value referrer-neutral.
    ///
    /// `set(key, None)` releases the current value's edge, if any, and
    /// removes the key. Clearing an absent key is a no-op.
    pub fn set(
        &mut self,
        document: &mut Document,
        key: impl Into<String>,
        value: Option<NodeId>,
    ) -> Result<()> {
        let key = key.into();
        let Some(value) = value else {
            self.release(document, &key);
            return Ok(());
        };

        let node = document.node(&value).ok_or(RefError::UnknownNode(value))?;
        self.attribute.validate(node)?;

        document.add_referrer(&value, self.owner);
        debug!(
            owner = %self.owner.short_id(),
            key = %key,
            node = %value.short_id(),
            "set reference"
        );
        if let Some(displaced) = self.entries.insert(key, value) {
            if !document.remove_referrer(&displaced, &self.owner) {
                warn!(
                    owner = %self.owner.short_id(),
                    node = %displaced.short_id(),
                    "displaced value held no matching referrer record"
                );
            }
        }
        Ok(())
    }

    /// Remove `key` and return its value, as a native map remove would.
    ///
    /// If a value was present, its referrer edge is released. Deleting an
    /// absent key is a no-op and returns `None`.
    pub fn delete(&mut self, document: &mut Document, key: &str) -> Option<NodeId> {
        let removed = self.release(document, key)?;
        debug!(
            owner = %self.owner.short_id(),
            key = %key,
            node = %removed.short_id(),
            "deleted reference"
        );
        Some(removed)
    }

    /// Remove every entry pointing at `target`, releasing one referrer edge
    /// per removed entry. Entries pointing at other nodes are untouched.
    ///
    /// Used when a node is excised from the document and every container
    /// pointing at it must be swept.
    pub fn remove_reference(&mut self, document: &mut Document, target: &NodeId) {
        let keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, value)| *value == target)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &keys {
            self.release(document, key);
        }
        if !keys.is_empty() {
            debug!(
                owner = %self.owner.short_id(),
                node = %target.short_id(),
                entries = keys.len(),
                "swept references to node"
            );
        }
    }

    // ---------------------------------------------------------------
    // Referrer fan-out
    // ---------------------------------------------------------------

    /// Register `referrer` once on every currently-held value.
    ///
    /// Cascades a referrer gained by the owner to everything the owner in
    /// turn references through this dictionary. Missing targets are skipped.
    pub fn add_referrer(&self, document: &mut Document, referrer: NodeId) {
        for value in self.entries.values() {
            document.add_referrer(value, referrer);
        }
    }

    /// Remove one record of `referrer` from every currently-held value.
    ///
    /// The teardown counterpart of [`Self::add_referrer`]. Missing targets
    /// are skipped.
    pub fn remove_referrer(&self, document: &mut Document, referrer: &NodeId) {
        for value in self.entries.values() {
            document.remove_referrer(value, referrer);
        }
    }

    // ---------------------------------------------------------------
    // Projections
    // ---------------------------------------------------------------

    /// The flat projection: every entry as `key -> target id`.
    pub fn to_flat(&self) -> BTreeMap<String, NodeId> {
        self.entries.clone()
    }

    /// The tree projection: every entry as `key -> target's tree rendering`,
    /// descending into the target's own nested structure.
    ///
    /// Entries whose target no longer resolves are skipped.
    pub fn to_tree(&self, document: &Document) -> BTreeMap<String, TreeValue> {
        self.entries
            .iter()
            .filter_map(|(key, value)| document.tree_of(value).map(|tree| (key.clone(), tree)))
            .collect()
    }

    // ---------------------------------------------------------------
    // Read-only surface
    // ---------------------------------------------------------------

    /// Look up the value at `key`.
    pub fn get(&self, key: &str) -> Option<NodeId> {
        self.entries.get(key).copied()
    }

    /// Returns `true` if `key` holds a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over held values.
    pub fn values(&self) -> impl Iterator<Item = &NodeId> {
        self.entries.values()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeId)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    // ---------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------

    /// Remove `key` and release the owner's referrer edge on its value.
    ///
    /// The single teardown path shared by `set(key, None)`, [`Self::delete`],
    /// and [`Self::remove_reference`]. Best-effort on the document side: a
    /// target that is already gone or holds no record is logged, not an
    /// error.
    fn release(&mut self, document: &mut Document, key: &str) -> Option<NodeId> {
        let removed = self.entries.remove(key)?;
        if !document.remove_referrer(&removed, &self.owner) {
            warn!(
                owner = %self.owner.short_id(),
                key = %key,
                node = %removed.short_id(),
                "released entry whose target held no matching referrer record"
            );
        }
        Some(removed)
    }
}

impl fmt::Debug for ReferenceDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceDictionary")
            .field("owner", &self.owner)
            .field("attribute", &self.attribute.name())
            .field("entries", &self.entries)
            .finish()
    }
}
