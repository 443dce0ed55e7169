//! Member record.
//!
//! # Responsibility
//! - Carry the identity and name of one directory entry.
//!
//! # Invariants
//! - `id` is `None` until the store persists the member.
//! - Once assigned, an `id` is never reused for another member.

use serde::{Deserialize, Serialize};

/// Store-assigned member identifier. The first saved member gets `1`.
pub type MemberId = u64;

/// One directory entry.
///
/// Values handed out by a store are copies; mutating them never changes
/// the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Member {
    /// Assigned on save. `None` for a member that was never stored.
    pub id: Option<MemberId>,
    /// Exact, case-sensitive lookup key. Unique across the directory.
    pub name: String,
}

impl Member {
    /// Creates an unsaved member with only its name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Returns whether a store has assigned this member an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Returns this member carrying `id`.
    ///
    /// Only stores should call this; the assigned id is the member's
    /// permanent identity.
    pub(crate) fn into_identified(self, id: MemberId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
