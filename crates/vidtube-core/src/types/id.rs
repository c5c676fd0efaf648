//! Typed identifier for objects admitted into drive storage.
//!
//! The identifier is an opaque token to callers. Internally it wraps a
//! [`uuid::Uuid`], rendered with an `obj_` prefix so that it cannot be
//! confused with other UUIDs flowing through the application (video ids,
//! channel ids) when it shows up in logs or retrieval locators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Prefix used in the textual form of an [`ObjectId`].
const OBJECT_ID_PREFIX: &str = "obj_";

/// Unique identifier for a stored object handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(Uuid);

impl ObjectId {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{OBJECT_ID_PREFIX}{}", self.0.simple())
    }
}

impl FromStr for ObjectId {
    type Err = uuid::Error;

    /// Accepts both the prefixed form (`obj_…`) and a bare UUID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix(OBJECT_ID_PREFIX).unwrap_or(s);
        Uuid::parse_str(raw).map(Self)
    }
}

impl From<Uuid> for ObjectId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
