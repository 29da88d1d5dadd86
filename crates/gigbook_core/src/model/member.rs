//! Member domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another member.
//! - `name` is the natural key: lookups are case-sensitive exact matches.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a member record.
pub type MemberId = Uuid;

/// Named individual, shared by name across bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable global ID used for linking and deduplication.
    pub id: MemberId,
    /// Natural key. Unique within the member store.
    pub name: String,
}

impl Member {
    /// Creates a new member with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a member with a caller-provided stable ID.
    ///
    /// Used by read paths where identity already exists in the store.
    pub fn with_id(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
