use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Width of every identifier interpolated into a project descriptor.
pub const OBJECT_ID_LEN: usize = 24;

/// Synthetic identifier used as a cross-reference key inside a project
/// descriptor. Carries no structural meaning beyond uniqueness within one
/// generation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(String);

impl ObjectId {
    /// Mint a fresh identifier: a v4 UUID with dashes stripped, uppercased
    /// and truncated to the fixed width. Collisions are astronomically
    /// unlikely at the scale of a single project, so none are detected.
    pub fn mint() -> Self {
        let hex = Uuid::new_v4().simple().to_string().to_uppercase();
        Self(hex[..OBJECT_ID_LEN].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
