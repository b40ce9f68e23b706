//! Register Handle Module
//!
//! The public face of the register. Cloning a handle shares the same map;
//! dropping the last clone stops the sweep task.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::debug;

use crate::config::Config;
use crate::error::{RegisterError, Result};
use crate::register::{Removed, Shared, ShouldRemove, SweepStats};
use crate::tasks::spawn_sweep_task;

// == Sweep Guard ==
/// Owns the sweep task's stop signal and fires it when dropped.
///
/// Only handles point at the guard. The sweep task captures `Shared` alone,
/// otherwise the guard could never be dropped while the task runs.
struct SweepGuard {
    stop: Option<oneshot::Sender<()>>,
}

impl Drop for SweepGuard {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            // The task may already be gone if its runtime shut down first
            let _ = stop.send(());
            debug!("Last register handle dropped, signalling sweep task to stop");
        }
    }
}

// == Cleaning Register ==
/// A thread-safe map whose entries are removed by a periodic sweep.
///
/// Every `interval` the sweep task takes the write lock, evaluates the
/// removal predicate against each entry (or removes everything when there is
/// no predicate), and passes each removed entry to the removal callback.
///
/// The predicate and callback run while the lock is held and must not call
/// back into the register, or the sweep deadlocks. A hook that panics
/// kills the sweep task: the handle stays usable, but no entry is ever
/// swept again.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use cleaning_register::CleaningRegister;
///
/// # tokio_test::block_on(async {
/// let register = CleaningRegister::new(Duration::from_secs(60), None, None).unwrap();
/// register.put("session", 42).await;
/// assert_eq!(register.get("session").await, Some(42));
/// # });
/// ```
pub struct CleaningRegister<K, V> {
    shared: Arc<Shared<K, V>>,
    guard: Arc<SweepGuard>,
}

impl<K, V> CleaningRegister<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates an empty register and starts its sweep task on the current
    /// tokio runtime.
    ///
    /// # Arguments
    /// * `interval` - Time between sweeps, must be non-zero
    /// * `should_remove` - Removal predicate, `None` removes every entry on every sweep
    /// * `removed` - Callback invoked once per entry a sweep removed
    ///
    /// # Errors
    /// * `RegisterError::ZeroInterval` - `interval` is zero
    /// * `RegisterError::NoRuntime` - called outside a tokio runtime
    pub fn new(
        interval: Duration,
        should_remove: Option<ShouldRemove<K, V>>,
        removed: Option<Removed<K, V>>,
    ) -> Result<Self> {
        if interval.is_zero() {
            return Err(RegisterError::ZeroInterval);
        }
        Handle::try_current().map_err(|_| RegisterError::NoRuntime)?;

        let shared = Arc::new(Shared::new(should_remove, removed));
        let (stop_tx, stop_rx) = oneshot::channel();

        spawn_sweep_task(shared.clone(), interval, stop_rx);

        Ok(Self {
            shared,
            guard: Arc::new(SweepGuard {
                stop: Some(stop_tx),
            }),
        })
    }

    /// Creates a register using the sweep interval from `config`.
    pub fn from_config(
        config: &Config,
        should_remove: Option<ShouldRemove<K, V>>,
        removed: Option<Removed<K, V>>,
    ) -> Result<Self> {
        Self::new(config.cleanup_interval, should_remove, removed)
    }

    // == Get ==
    /// Returns a clone of the value stored under `key`.
    ///
    /// Reading an entry does not extend its life.
    pub async fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.shared.get(key).await
    }

    // == Put ==
    /// Inserts or overwrites the entry for `key`.
    ///
    /// An overwritten value is dropped without reaching the removal callback.
    pub async fn put(&self, key: K, value: V) {
        self.shared.put(key, value).await
    }

    // == Pop ==
    /// Removes and returns the entry for `key` in one critical section.
    ///
    /// The removal callback is reserved for sweeps and is not invoked.
    pub async fn pop<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.shared.pop(key).await
    }

    // == Copy ==
    /// Returns an independent snapshot of all entries taken at one instant.
    pub async fn copy(&self) -> HashMap<K, V> {
        self.shared.copy().await
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.shared.len().await
    }

    /// Returns true when the register holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    // == Stats ==
    /// Returns sweep counters and the current entry count.
    pub async fn stats(&self) -> SweepStats {
        self.shared.stats().await
    }
}

impl<K, V> Clone for CleaningRegister<K, V> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
            guard: self.guard.clone(),
        }
    }
}

impl<K, V> fmt::Debug for CleaningRegister<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleaningRegister")
            .field("handles", &Arc::strong_count(&self.guard))
            .finish_non_exhaustive()
    }
}
