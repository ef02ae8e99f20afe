//! Backend service state.

use crate::storage::{InteractionStorage, KeyValueStore};

/// Top-level state: the three tables.
///
/// All state is process-local and in-memory; every store supports
/// concurrent access without external locking.
#[derive(Debug)]
pub struct ApiState {
    /// Users table, keyed by `userId`.
    pub users: KeyValueStore,
    /// Items table, keyed by `itemId`.
    pub items: KeyValueStore,
    /// Interaction log, keyed by `(actorId, sortKey)`.
    pub interactions: InteractionStorage,
}

impl ApiState {
    /// Create empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: KeyValueStore::new("userId"),
            items: KeyValueStore::new("itemId"),
            interactions: InteractionStorage::new(),
        }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}
