//! Attribute descriptors: the validation seam for inserted values.
//!
//! Every reference dictionary is bound to exactly one [`RefAttribute`] at
//! construction. The descriptor names the dictionary's role in the schema
//! and decides which nodes are acceptable values there. The trait is
//! object-safe and `Send + Sync` so descriptors can be stored as
//! `Box<dyn RefAttribute>`.

use std::collections::BTreeSet;

use plexus_graph::Node;

use crate::error::ValidationError;

/// A per-field descriptor validating values inserted into one dictionary.
pub trait RefAttribute: Send + Sync {
    /// The attribute's schema name (e.g. "children", "targets").
    fn name(&self) -> &str;

    /// Check whether `node` is an acceptable value for this attribute.
    fn validate(&self, node: &Node) -> Result<(), ValidationError>;
}

/// An attribute that accepts every node.
#[derive(Clone, Debug)]
pub struct AnyNodeAttribute {
    name: String,
}

impl AnyNodeAttribute {
    /// Create a descriptor with the given schema name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl RefAttribute for AnyNodeAttribute {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, _node: &Node) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// An attribute that accepts nodes of an allowed set of kinds.
#[derive(Clone, Debug)]
pub struct KindAttribute {
    name: String,
    allowed: BTreeSet<String>,
}

impl KindAttribute {
    /// Create a descriptor accepting only the listed kinds.
    ///
    /// # Examples
    ///
    /// ```
    /// use plexus_graph::Node;
    /// use plexus_refs::{KindAttribute, RefAttribute};
    ///
    /// let targets = KindAttribute::new("targets", ["NativeTarget", "AggregateTarget"]);
    /// assert!(targets.validate(&Node::new("NativeTarget")).is_ok());
    /// assert!(targets.validate(&Node::new("Group")).is_err());
    /// ```
    pub fn new<I, S>(name: impl Into<String>, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            allowed: kinds.into_iter().map(Into::into).collect(),
        }
    }

    /// The kinds this attribute accepts.
    pub fn allowed_kinds(&self) -> &BTreeSet<String> {
        &self.allowed
    }
}

impl RefAttribute for KindAttribute {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, node: &Node) -> Result<(), ValidationError> {
        if self.allowed.contains(&node.kind) {
            Ok(())
        } else {
            Err(ValidationError {
                attribute: self.name.clone(),
                node: node.id,
                reason: format!("kind {:?} is not accepted here", node.kind),
            })
        }
    }
}
