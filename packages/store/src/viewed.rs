//! # Viewed-notification tracking
//!
//! Notifications are regenerated by the backend on every poll and carry no
//! id, so the client remembers which ones the user has already seen by their
//! position in the list. [`ViewedSet`] is that record: a per-user set of
//! indices persisted under the key `viewedNotifications_<userId>` as a JSON
//! array.
//!
//! The unread count is a set difference — the indices in `[0, total)` that
//! are not in the set — so marking everything viewed drops the count to zero
//! immediately, and indices left over from a longer list in an earlier poll
//! are ignored.

use std::collections::BTreeSet;

use crate::local::LocalStore;

/// Per-user set of viewed notification indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewedSet {
    user_id: String,
    indices: BTreeSet<usize>,
}

impl ViewedSet {
    fn key(user_id: &str) -> String {
        format!("viewedNotifications_{user_id}")
    }

    /// Load the persisted set for a user. A missing or corrupt entry loads
    /// as empty.
    pub fn load<S: LocalStore>(store: &S, user_id: &str) -> Self {
        let indices = store
            .get(&Self::key(user_id))
            .and_then(|raw| serde_json::from_str::<Vec<usize>>(&raw).ok())
            .map(|list| list.into_iter().collect())
            .unwrap_or_default();
        Self {
            user_id: user_id.to_string(),
            indices,
        }
    }

    fn save<S: LocalStore>(&self, store: &S) {
        if let Ok(raw) = serde_json::to_string(&self.indices.iter().copied().collect::<Vec<_>>()) {
            store.set(&Self::key(&self.user_id), &raw);
        }
    }

    /// Mark a single notification as viewed.
    pub fn mark<S: LocalStore>(&mut self, store: &S, index: usize) {
        if self.indices.insert(index) {
            self.save(store);
        }
    }

    /// Mark every notification in the current list (`0..total`) as viewed.
    pub fn mark_all<S: LocalStore>(&mut self, store: &S, total: usize) {
        self.indices.extend(0..total);
        self.save(store);
    }

    pub fn is_viewed(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Indices in `[0, total)` that have not been viewed.
    pub fn unviewed_count(&self, total: usize) -> usize {
        (0..total).filter(|index| !self.indices.contains(index)).count()
    }

    /// Forget everything and drop the persisted entry. Used on logout.
    pub fn reset<S: LocalStore>(&mut self, store: &S) {
        self.indices.clear();
        store.remove(&Self::key(&self.user_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local::MemoryStore;

    #[test]
    fn test_empty_set_counts_everything_unviewed() {
        let store = MemoryStore::new();
        let set = ViewedSet::load(&store, "u1");
        assert_eq!(set.unviewed_count(4), 4);
        assert_eq!(set.unviewed_count(0), 0);
    }

    #[test]
    fn test_mark_all_zeroes_the_unread_count() {
        let store = MemoryStore::new();
        let mut set = ViewedSet::load(&store, "u1");
        set.mark(&store, 1);
        set.mark_all(&store, 7);
        assert_eq!(set.unviewed_count(7), 0);
    }

    #[test]
    fn test_mark_single_index() {
        let store = MemoryStore::new();
        let mut set = ViewedSet::load(&store, "u1");
        set.mark(&store, 2);
        assert!(set.is_viewed(2));
        assert!(!set.is_viewed(0));
        assert_eq!(set.unviewed_count(3), 2);
    }

    #[test]
    fn test_roundtrips_through_the_store() {
        let store = MemoryStore::new();
        let mut set = ViewedSet::load(&store, "u1");
        set.mark(&store, 0);
        set.mark(&store, 3);

        let reloaded = ViewedSet::load(&store, "u1");
        assert_eq!(reloaded, set);
        assert_eq!(reloaded.unviewed_count(4), 2);
    }

    #[test]
    fn test_sets_are_scoped_per_user() {
        let store = MemoryStore::new();
        let mut set = ViewedSet::load(&store, "u1");
        set.mark_all(&store, 3);

        let other = ViewedSet::load(&store, "u2");
        assert_eq!(other.unviewed_count(3), 3);
    }

    #[test]
    fn test_stale_indices_do_not_count() {
        // A shorter list after a poll: indices past the end are ignored.
        let store = MemoryStore::new();
        let mut set = ViewedSet::load(&store, "u1");
        set.mark_all(&store, 10);
        assert_eq!(set.unviewed_count(3), 0);
    }

    #[test]
    fn test_reset_clears_set_and_storage() {
        let store = MemoryStore::new();
        let mut set = ViewedSet::load(&store, "u1");
        set.mark_all(&store, 5);
        set.reset(&store);

        assert_eq!(set.unviewed_count(5), 5);
        assert!(store.get("viewedNotifications_u1").is_none());
        assert_eq!(ViewedSet::load(&store, "u1").unviewed_count(5), 5);
    }

    #[test]
    fn test_corrupt_entry_loads_empty() {
        let store = MemoryStore::new();
        store.set("viewedNotifications_u1", "not json");
        let set = ViewedSet::load(&store, "u1");
        assert_eq!(set.unviewed_count(2), 2);
    }
}
