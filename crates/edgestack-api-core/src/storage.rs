//! In-memory storage for the backend tables.
//!
//! Two shapes cover the three tables:
//!
//! - [`KeyValueStore`]: a concurrent map keyed by a single id (users,
//!   items). Records are JSON objects; writes merge a validated field set
//!   into the existing record, creating it on first write.
//! - [`InteractionStorage`]: a partition/sort layout for the append-only
//!   interaction log.
//!
//! ```text
//! DashMap<ActorId, BTreeMap<SortKey, InteractionRecord>>
//! ```
//!
//! - Partition-level concurrency: different actors can be read/written
//!   concurrently without contention.
//! - Sort key ordering: within each partition, records are stored in a
//!   `BTreeMap` keyed by `"{ts}#{itemId}"`. The timestamp is a fixed-width
//!   RFC 3339 string, so lexicographic order is chronological order and a
//!   reverse iteration yields newest-first.

use std::collections::BTreeMap;

use dashmap::DashMap;
use tracing::debug;

use edgestack_api_model::InteractionRecord;

/// A stored record: a JSON object map.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Concurrent single-key store for users and items.
#[derive(Debug)]
pub struct KeyValueStore {
    /// Name of the key attribute written into every record.
    key_field: &'static str,
    records: DashMap<String, Record>,
}

impl KeyValueStore {
    /// Creates an empty store whose records carry `key_field` as their id
    /// attribute.
    #[must_use]
    pub fn new(key_field: &'static str) -> Self {
        Self {
            key_field,
            records: DashMap::new(),
        }
    }

    /// Retrieves a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Record> {
        self.records.get(id).map(|r| r.value().clone())
    }

    /// Whether a record exists for this id.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Merges a field set into the record, creating it on first write.
    ///
    /// The key attribute is always (re)written from the id, so a record can
    /// never disagree with the key it is stored under.
    pub fn merge(&self, id: &str, fields: Record) {
        let mut entry = self.records.entry(id.to_owned()).or_default();
        entry.insert(
            self.key_field.to_owned(),
            serde_json::Value::String(id.to_owned()),
        );
        for (name, value) in fields {
            entry.insert(name, value);
        }
        debug!(id, "merged record fields");
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Append-only partition/sort storage for the interaction log.
#[derive(Debug, Default)]
pub struct InteractionStorage {
    /// Actor id -> sorted records within that partition.
    partitions: DashMap<String, BTreeMap<String, InteractionRecord>>,
}

impl InteractionStorage {
    /// Creates an empty interaction store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record under `(actor_id, sort_key)`.
    pub fn append(&self, record: InteractionRecord) {
        let mut partition = self.partitions.entry(record.actor_id.clone()).or_default();
        partition.insert(record.sort_key.clone(), record);
    }

    /// Returns the most recent `limit` records for an actor, newest first.
    #[must_use]
    pub fn list_recent(&self, actor_id: &str, limit: usize) -> Vec<InteractionRecord> {
        let Some(partition) = self.partitions.get(actor_id) else {
            return Vec::new();
        };

        partition
            .iter()
            .rev()
            .take(limit)
            .map(|(_, record)| record.clone())
            .collect()
    }

    /// Number of records stored for an actor.
    #[must_use]
    pub fn partition_len(&self, actor_id: &str) -> usize {
        self.partitions.get(actor_id).map_or(0, |p| p.len())
    }
}
