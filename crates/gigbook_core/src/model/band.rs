//! Band domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another band.
//! - `name` is the natural key: one band record per name, shared across
//!   every event that references it.
//! - `members` holds references to store-resident members; an update
//!   replaces the whole set, it never merges.

use crate::model::member::Member;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a band record.
pub type BandId = Uuid;

/// Named musical group with a set of members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    /// Stable global ID used for linking and deduplication.
    pub id: BandId,
    /// Natural key. Unique within the band store.
    pub name: String,
    /// Store-resident members, loaded in deterministic `name ASC` order.
    pub members: Vec<Member>,
}

impl Band {
    /// Creates a new band with a generated stable ID and no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a band with a caller-provided stable ID and no members.
    pub fn with_id(id: BandId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: Vec::new(),
        }
    }
}
