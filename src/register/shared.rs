//! Shared Register State
//!
//! The state both the handle and the sweep task point at. The sweep task
//! holds an `Arc` to this, never to the handle, so the handle can be dropped
//! while the task is still running.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tokio::sync::RwLock;

use crate::register::{RegisterStore, Removed, ShouldRemove, SweepStats};

// == Shared State ==
/// Lock-guarded store plus the caller's sweep hooks.
pub(crate) struct Shared<K, V> {
    /// One lock over the whole map
    store: RwLock<RegisterStore<K, V>>,
    should_remove: Option<ShouldRemove<K, V>>,
    removed: Option<Removed<K, V>>,
}

impl<K, V> Shared<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(should_remove: Option<ShouldRemove<K, V>>, removed: Option<Removed<K, V>>) -> Self {
        Self {
            store: RwLock::new(RegisterStore::new()),
            should_remove,
            removed,
        }
    }

    pub async fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.read().await.get(key)
    }

    pub async fn put(&self, key: K, value: V) {
        self.store.write().await.put(key, value);
    }

    pub async fn pop<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.write().await.pop(key)
    }

    pub async fn copy(&self) -> HashMap<K, V> {
        self.store.read().await.copy()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn stats(&self) -> SweepStats {
        self.store.read().await.stats()
    }

    // == Sweep ==
    /// Runs one sweep pass with the write lock held for its whole duration.
    pub async fn sweep(&self) -> usize {
        let mut store = self.store.write().await;
        store.sweep(self.should_remove.as_ref(), self.removed.as_ref())
    }
}
