//! Member use-case services.
//!
//! # Responsibility
//! - Enforce directory business rules on top of a member store.
//! - Keep callers decoupled from the store implementation.

pub mod member_directory;
