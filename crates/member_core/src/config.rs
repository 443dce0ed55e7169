//! Directory configuration.
//!
//! # Responsibility
//! - Select how `MemberDirectory::register` behaves under concurrent callers.
//!
//! # Invariants
//! - The default preserves the unguarded check-then-save sequence.

use serde::{Deserialize, Serialize};

/// Locking policy for the register path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterGuard {
    /// Name check and save run without a shared lock. Concurrent
    /// registrations of one name can all pass the check and all be stored.
    #[default]
    Unguarded,
    /// One mutex spans the name check and the save. Exactly one concurrent
    /// registration of a given name succeeds.
    Serialized,
}

/// Construction-time options for [`crate::MemberDirectory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub register_guard: RegisterGuard,
}

impl DirectoryConfig {
    /// Config with the register path serialized.
    pub fn serialized() -> Self {
        Self {
            register_guard: RegisterGuard::Serialized,
        }
    }

    pub fn is_guarded(&self) -> bool {
        self.register_guard == RegisterGuard::Serialized
    }
}
