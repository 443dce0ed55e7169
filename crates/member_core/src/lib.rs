//! Core logic for the member directory.
//! Owns member storage and the unique-name registration rule.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{DirectoryConfig, RegisterGuard};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::member::{Member, MemberId};
pub use repo::member_repo::{MemberStore, MemoryMemberStore};
pub use service::member_directory::{DirectoryError, DirectoryResult, MemberDirectory};

/// Minimal health-check API for callers probing linkage.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
