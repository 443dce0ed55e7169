//! Member store contract and in-memory implementation.
//!
//! # Responsibility
//! - Assign ids from a monotonic sequence starting at `1`.
//! - Answer id, name and full-collection lookups with copies.
//!
//! # Invariants
//! - Sequence increment and insert happen under one write lock, so
//!   concurrent saves never share an id.
//! - `clear` drops members but keeps counting ids.
//! - Missing lookups are `None`, never an error.

use crate::model::member::{Member, MemberId};
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Storage interface used by [`crate::MemberDirectory`].
pub trait MemberStore: Send + Sync {
    /// Assigns the next id to `member`, stores it and returns the stored copy.
    ///
    /// Always succeeds. An id already present on `member` is replaced.
    fn save(&self, member: Member) -> Member;
    fn find_by_id(&self, id: MemberId) -> Option<Member>;
    /// Returns any member whose name equals `name` exactly.
    fn find_by_name(&self, name: &str) -> Option<Member>;
    /// Returns a snapshot of all members in unspecified order.
    fn find_all(&self) -> Vec<Member>;
    /// Removes every member. The id sequence is not reset.
    fn clear(&self);
}

impl<S: MemberStore + ?Sized> MemberStore for &S {
    fn save(&self, member: Member) -> Member {
        (**self).save(member)
    }

    fn find_by_id(&self, id: MemberId) -> Option<Member> {
        (**self).find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> Option<Member> {
        (**self).find_by_name(name)
    }

    fn find_all(&self) -> Vec<Member> {
        (**self).find_all()
    }

    fn clear(&self) {
        (**self).clear()
    }
}

impl<S: MemberStore + ?Sized> MemberStore for Arc<S> {
    fn save(&self, member: Member) -> Member {
        (**self).save(member)
    }

    fn find_by_id(&self, id: MemberId) -> Option<Member> {
        (**self).find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> Option<Member> {
        (**self).find_by_name(name)
    }

    fn find_all(&self) -> Vec<Member> {
        (**self).find_all()
    }

    fn clear(&self) {
        (**self).clear()
    }
}

#[derive(Default)]
struct StoreState {
    members: HashMap<MemberId, Member>,
    /// Last id handed out; `0` before the first save.
    sequence: MemberId,
}

/// Process-lifetime member store backed by a `HashMap`.
#[derive(Default)]
pub struct MemoryMemberStore {
    state: RwLock<StoreState>,
}

impl MemoryMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().members.is_empty()
    }

    /// Returns the highest id assigned so far, surviving `clear`.
    pub fn last_assigned_id(&self) -> Option<MemberId> {
        match self.read().sequence {
            0 => None,
            id => Some(id),
        }
    }

    // Critical sections never leave the state half-written, so a poisoned
    // lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MemberStore for MemoryMemberStore {
    fn save(&self, member: Member) -> Member {
        let mut state = self.write();
        state.sequence += 1;
        let id = state.sequence;
        let member = member.into_identified(id);
        state.members.insert(id, member.clone());
        drop(state);

        debug!("event=member_save module=store status=ok member_id={id}");
        member
    }

    fn find_by_id(&self, id: MemberId) -> Option<Member> {
        self.read().members.get(&id).cloned()
    }

    fn find_by_name(&self, name: &str) -> Option<Member> {
        self.read()
            .members
            .values()
            .find(|member| member.name == name)
            .cloned()
    }

    fn find_all(&self) -> Vec<Member> {
        self.read().members.values().cloned().collect()
    }

    fn clear(&self) {
        let mut state = self.write();
        let removed = state.members.len();
        state.members.clear();
        let sequence = state.sequence;
        drop(state);

        debug!("event=member_clear module=store status=ok removed={removed} sequence={sequence}");
    }
}

#[cfg(test)]
mod tests {
    use super::{MemberStore, MemoryMemberStore};
    use crate::model::member::Member;

    #[test]
    fn save_replaces_caller_supplied_id() {
        let store = MemoryMemberStore::new();
        let mut member = Member::new("spring");
        member.id = Some(42);

        let saved = store.save(member);
        assert_eq!(saved.id, Some(1));
        assert!(store.find_by_id(42).is_none());
    }

    #[test]
    fn last_assigned_id_survives_clear() {
        let store = MemoryMemberStore::new();
        assert_eq!(store.last_assigned_id(), None);

        store.save(Member::new("a"));
        store.save(Member::new("b"));
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.last_assigned_id(), Some(2));
    }

    #[test]
    fn returned_copies_do_not_alias_store() {
        let store = MemoryMemberStore::new();
        let id = store.save(Member::new("spring")).id.unwrap();

        let mut copy = store.find_by_id(id).unwrap();
        copy.name.push_str("-edited");

        let mut listed = store.find_all();
        listed.clear();

        assert_eq!(store.find_by_id(id).unwrap().name, "spring");
        assert_eq!(store.len(), 1);
    }
}
