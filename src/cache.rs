//! In-memory TTL cache with capacity-bounded eviction
//!
//! Memoizes normalized results keyed by request identity (`post-<slug>`,
//! `posts-list`, ...). Entries expire by absolute age but are not swept
//! proactively: a stale entry stays physically present until it is
//! overwritten or evicted by the capacity rule. Eviction removes exactly
//! one entry per insert — the one with the smallest timestamp — so
//! repeated inserts while at capacity shed entries one at a time.
//!
//! Entries are never mutated in place; a refreshed value replaces the old
//! entry wholesale.

use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// One cached value plus the wall-clock instant it was stored
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    /// Milliseconds since the Unix epoch at insert/refresh time
    pub timestamp: u64,
}

/// String-keyed TTL cache with a fixed entry-count ceiling
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    ttl_ms: u64,
    capacity: usize,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

impl<V> TtlCache<V> {
    /// Create a cache. `capacity` of zero is bumped to one so an insert
    /// can always land.
    #[must_use]
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_ms: ttl.as_millis() as u64,
            capacity: capacity.max(1),
        }
    }

    /// Fetch a live value. Entries whose age has reached the TTL behave
    /// as a miss even though they are still physically present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_at(key, now_ms())
    }

    /// `get` with an explicit clock, for deterministic expiry tests.
    /// The freshness window is strict: an entry aged exactly TTL is stale.
    #[must_use]
    pub fn get_at(&self, key: &str, now_ms: u64) -> Option<&V> {
        let entry = self.entries.get(key)?;
        if now_ms.saturating_sub(entry.timestamp) < self.ttl_ms {
            Some(&entry.value)
        } else {
            None
        }
    }

    /// Store a value, evicting the single oldest entry first when the map
    /// is at or over capacity.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        self.insert_at(key, value, now_ms());
    }

    /// `insert` with an explicit clock, for deterministic eviction tests.
    pub fn insert_at(&mut self, key: impl Into<String>, value: V, now_ms: u64) {
        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        self.entries
            .insert(key.into(), CacheEntry { value, timestamp: now_ms });
    }

    /// Remove the entry with the smallest stored timestamp (oldest insert
    /// or refresh, not oldest logical content).
    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.timestamp)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            log::debug!("cache at capacity, evicting oldest entry '{key}'");
            self.entries.remove(&key);
        }
    }

    /// Number of physically present entries, stale ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Physical presence check, ignoring freshness. Mostly useful in
    /// tests asserting that expiry does not delete.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
