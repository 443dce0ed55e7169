//! Member registration and query service.
//!
//! # Responsibility
//! - Reject registrations whose name is already taken.
//! - Delegate persistence and lookups to the injected store.
//!
//! # Invariants
//! - A rejected registration performs no insert.
//! - With `RegisterGuard::Unguarded` the name check and the save are two
//!   separate store calls; concurrent registrations of one name can all
//!   succeed. `RegisterGuard::Serialized` closes that window for callers
//!   going through this directory.

use crate::config::{DirectoryConfig, RegisterGuard};
use crate::model::member::{Member, MemberId};
use crate::repo::member_repo::MemberStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory use-case error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A member with this exact name is already registered. Retrying with
    /// the same name fails again.
    DuplicateName(String),
    /// The store returned a saved member without an id.
    InconsistentState(&'static str),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "member already exists: `{name}`"),
            Self::InconsistentState(details) => write!(f, "inconsistent member state: {details}"),
        }
    }
}

impl Error for DirectoryError {}

/// Register/query surface over a member store.
pub struct MemberDirectory<S: MemberStore> {
    store: S,
    config: DirectoryConfig,
    register_lock: Mutex<()>,
}

impl<S: MemberStore> MemberDirectory<S> {
    /// Creates a directory over `store` with the default (unguarded) config.
    pub fn new(store: S) -> Self {
        Self::with_config(store, DirectoryConfig::default())
    }

    pub fn with_config(store: S, config: DirectoryConfig) -> Self {
        Self {
            store,
            config,
            register_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> DirectoryConfig {
        self.config
    }

    /// Registers `member` and returns its assigned id.
    ///
    /// # Errors
    /// - `DuplicateName` when a stored member already has `member.name`.
    /// - `InconsistentState` when the store hands back a member with no id.
    pub fn register(&self, member: Member) -> DirectoryResult<MemberId> {
        let _guard = self.register_guard();

        let name_len = member.name.chars().count();
        if self.store.find_by_name(&member.name).is_some() {
            info!(
                "event=member_register module=directory status=rejected reason=duplicate_name name_len={name_len}"
            );
            return Err(DirectoryError::DuplicateName(member.name));
        }

        let id = self
            .store
            .save(member)
            .id
            .ok_or(DirectoryError::InconsistentState("saved member has no id"))?;

        info!("event=member_register module=directory status=ok member_id={id} name_len={name_len}");
        Ok(id)
    }

    /// Lists every registered member in unspecified order.
    pub fn list_members(&self) -> Vec<Member> {
        self.store.find_all()
    }

    pub fn find_one(&self, id: MemberId) -> Option<Member> {
        self.store.find_by_id(id)
    }

    fn register_guard(&self) -> Option<MutexGuard<'_, ()>> {
        match self.config.register_guard {
            RegisterGuard::Unguarded => None,
            RegisterGuard::Serialized => Some(
                self.register_lock
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DirectoryError, MemberDirectory};
    use crate::model::member::{Member, MemberId};
    use crate::repo::member_repo::MemberStore;

    /// Store that forgets to assign ids.
    struct IdlessStore;

    impl MemberStore for IdlessStore {
        fn save(&self, member: Member) -> Member {
            member
        }

        fn find_by_id(&self, _id: MemberId) -> Option<Member> {
            None
        }

        fn find_by_name(&self, _name: &str) -> Option<Member> {
            None
        }

        fn find_all(&self) -> Vec<Member> {
            Vec::new()
        }

        fn clear(&self) {}
    }

    #[test]
    fn register_reports_store_that_skips_id_assignment() {
        let directory = MemberDirectory::new(IdlessStore);
        let err = directory
            .register(Member::new("spring"))
            .expect_err("member without id must be reported");
        assert!(matches!(err, DirectoryError::InconsistentState(_)));
    }

    #[test]
    fn duplicate_name_error_message_names_member() {
        let err = DirectoryError::DuplicateName("alice".to_string());
        assert_eq!(err.to_string(), "member already exists: `alice`");
    }
}
