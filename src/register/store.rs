//! Register Store Module
//!
//! The state guarded by the register's lock: the entry map and its sweep
//! counters. Every method here assumes the caller already holds the lock.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::register::{Removed, ShouldRemove, SweepStats};

// == Register Store ==
/// Key-value storage swept by the background task.
#[derive(Debug)]
pub(crate) struct RegisterStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Sweep counters
    stats: SweepStats,
}

impl<K, V> RegisterStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: SweepStats::new(),
        }
    }

    // == Get ==
    /// Returns a clone of the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).cloned()
    }

    // == Put ==
    /// Inserts or silently overwrites the entry for `key`.
    pub fn put(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    // == Pop ==
    /// Removes and returns the entry for `key`.
    pub fn pop<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key)
    }

    // == Copy ==
    /// Returns an independent snapshot of every entry.
    pub fn copy(&self) -> HashMap<K, V> {
        self.entries.clone()
    }

    // == Sweep ==
    /// Removes every entry the predicate accepts, or every entry when there
    /// is no predicate, then hands each removed entry to the callback.
    ///
    /// All matching entries leave the map before the first callback runs.
    /// Returns the number of entries removed.
    pub fn sweep(
        &mut self,
        should_remove: Option<&ShouldRemove<K, V>>,
        removed: Option<&Removed<K, V>>,
    ) -> usize {
        let doomed: Vec<K> = self
            .entries
            .iter()
            .filter(|(key, value)| should_remove.map_or(true, |f| f(*key, *value)))
            .map(|(key, _)| key.clone())
            .collect();

        let evicted: Vec<(K, V)> = doomed
            .iter()
            .filter_map(|key| self.entries.remove_entry(key))
            .collect();

        let count = evicted.len();
        self.stats.record_sweep(count);

        if let Some(callback) = removed {
            for (key, value) in evicted {
                callback(key, value);
            }
        }

        count
    }

    // == Stats ==
    /// Returns the sweep counters with the current entry count filled in.
    pub fn stats(&self) -> SweepStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
