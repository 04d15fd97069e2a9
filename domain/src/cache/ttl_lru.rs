//! TTL + LRU cache

use super::clock::{Clock, SystemClock};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::time::{Duration, Instant};

struct Entry<V> {
    value: V,
    touched: Instant,
    /// Position in the recency order; larger is more recent
    tick: u64,
}

/// A bounded cache with sliding expiry and least-recently-used eviction
///
/// - Every successful `get` or `set` refreshes both the entry's recency and
///   its timestamp, so an entry that keeps being read never expires.
/// - Entries older than `ttl` are dropped at the start of each `get`/`set`,
///   whichever key it is for.
/// - A `set` that pushes the size past `max_entries` evicts exactly the
///   least recently used entry.
///
/// # Example
///
/// ```
/// use kanji_domain::cache::TtlLruCache;
/// use std::time::Duration;
///
/// let mut cache = TtlLruCache::new(2, Duration::from_secs(60));
/// cache.set("a", 1);
/// cache.set("b", 2);
/// cache.set("c", 3);
/// assert_eq!(cache.get(&"a"), None);
/// assert_eq!(cache.get(&"c"), Some(&3));
/// ```
pub struct TtlLruCache<K, V, C = SystemClock> {
    max_entries: usize,
    ttl: Duration,
    clock: C,
    entries: HashMap<K, Entry<V>>,
    recency: BTreeMap<u64, K>,
    next_tick: u64,
}

impl<K, V> TtlLruCache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
{
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self::with_clock(max_entries, ttl, SystemClock)
    }
}

impl<K, V, C> TtlLruCache<K, V, C>
where
    K: Eq + Hash + Clone,
    C: Clock,
{
    pub fn with_clock(max_entries: usize, ttl: Duration, clock: C) -> Self {
        Self {
            max_entries,
            ttl,
            clock,
            entries: HashMap::new(),
            recency: BTreeMap::new(),
            next_tick: 0,
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of entries held, including expired ones not yet swept
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a fresh entry and mark it as just used
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.evict_expired();
        let now = self.clock.now();
        let tick = self.tick();

        let entry = self.entries.get_mut(key)?;
        self.recency.remove(&entry.tick);
        self.recency.insert(tick, key.clone());
        entry.tick = tick;
        entry.touched = now;
        Some(&entry.value)
    }

    /// Insert or replace an entry, evicting the least recently used one if full
    pub fn set(&mut self, key: K, value: V) {
        self.evict_expired();
        let now = self.clock.now();
        let tick = self.tick();

        let entry = Entry {
            value,
            touched: now,
            tick,
        };
        if let Some(previous) = self.entries.insert(key.clone(), entry) {
            self.recency.remove(&previous.tick);
        }
        self.recency.insert(tick, key);

        if self.entries.len() > self.max_entries
            && let Some((_, oldest)) = self.recency.pop_first()
        {
            self.entries.remove(&oldest);
        }
    }

    /// Remove an entry; no-op when absent
    pub fn evict(&mut self, key: &K) -> Option<V> {
        let entry = self.entries.remove(key)?;
        self.recency.remove(&entry.tick);
        Some(entry.value)
    }

    fn tick(&mut self) -> u64 {
        self.next_tick += 1;
        self.next_tick
    }

    fn evict_expired(&mut self) {
        let now = self.clock.now();
        let ttl = self.ttl;
        let expired: Vec<(K, u64)> = self
            .entries
            .iter()
            .filter(|(_, e)| now.duration_since(e.touched) > ttl)
            .map(|(k, e)| (k.clone(), e.tick))
            .collect();
        for (key, tick) in expired {
            self.entries.remove(&key);
            self.recency.remove(&tick);
        }
    }
}

impl<K, V, C> std::fmt::Debug for TtlLruCache<K, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlLruCache")
            .field("max_entries", &self.max_entries)
            .field("ttl", &self.ttl)
            .field("len", &self.entries.len())
            .finish()
    }
}
