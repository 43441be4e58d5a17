//! Plain tree-shaped values, the currency of the tree projection.
//!
//! A [`TreeValue`] is what a node renders itself into when serialized with
//! its nested structure inlined. The shape is deliberately small: strings at
//! the leaves, arrays, and string-keyed dicts. Dict entries live in a
//! [`BTreeMap`] so rendered output is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A plain representation value consumed by an external encoder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeValue {
    /// A string leaf.
    String(String),
    /// An ordered list of values.
    Array(Vec<TreeValue>),
    /// A string-keyed mapping, ordered by key.
    Dict(BTreeMap<String, TreeValue>),
}

impl TreeValue {
    /// An empty dict value.
    pub fn empty_dict() -> Self {
        Self::Dict(BTreeMap::new())
    }

    /// An empty array value.
    pub fn empty_array() -> Self {
        Self::Array(Vec::new())
    }

    /// The string content, if this is a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[TreeValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, if this is a dict.
    pub fn as_dict(&self) -> Option<&BTreeMap<String, TreeValue>> {
        match self {
            Self::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a dict entry by key. Returns `None` for non-dict values.
    pub fn get(&self, key: &str) -> Option<&TreeValue> {
        self.as_dict().and_then(|entries| entries.get(key))
    }

    /// Returns `true` if this is a string leaf.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns `true` if this is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns `true` if this is a dict.
    pub fn is_dict(&self) -> bool {
        matches!(self, Self::Dict(_))
    }
}

impl From<&str> for TreeValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for TreeValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<TreeValue>> for TreeValue {
    fn from(items: Vec<TreeValue>) -> Self {
        Self::Array(items)
    }
}

impl From<BTreeMap<String, TreeValue>> for TreeValue {
    fn from(entries: BTreeMap<String, TreeValue>) -> Self {
        Self::Dict(entries)
    }
}
