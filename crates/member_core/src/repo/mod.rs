//! Member storage contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Own the authoritative member collection and the id sequence.
//! - Keep storage details away from directory business rules.
//!
//! # Invariants
//! - Stores never check name uniqueness; that rule lives in the directory.
//! - Ids are handed out from a monotonic sequence that is never rewound.

pub mod member_repo;
