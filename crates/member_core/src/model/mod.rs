//! Domain model for the member directory.
//!
//! # Responsibility
//! - Define the member record handed between callers, directory and store.
//!
//! # Invariants
//! - Identity is assigned by the store only; callers build members by name.

pub mod member;
