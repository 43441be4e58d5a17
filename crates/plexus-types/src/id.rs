use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Stable identifier for a document node (UUID v7 for time-ordering).
///
/// Every node carries exactly one `NodeId`, assigned at creation and never
/// changed. Containers reference nodes by id only, so equality of reference
/// targets is equality of ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(uuid::Uuid);

impl NodeId {
    /// Generate a new time-ordered node ID (UUID v7).
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }

    /// Parse from the hyphenated string form.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let uuid = uuid::Uuid::parse_str(s)
            .map_err(|e| TypeError::InvalidIdentifier(format!("{s:?}: {e}")))?;
        Ok(Self(uuid))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.short_id())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
