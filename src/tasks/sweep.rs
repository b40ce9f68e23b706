//! Sweep Task
//!
//! Background task that periodically sweeps a register's entries.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::register::Shared;

/// Spawns the task that sweeps `shared` every `interval`.
///
/// The first sweep happens one full interval after the call. A sweep that
/// overruns its slot delays the next tick instead of triggering a burst.
///
/// The task exits when `stop` resolves, either because a value was sent or
/// because the sender was dropped. The stop signal is checked before each
/// tick, so no sweep starts once it has been observed.
///
/// An interval too large to schedule disables sweeping; the task then only
/// waits for `stop`.
///
/// # Arguments
/// * `shared` - State of the register to sweep
/// * `interval` - Time between sweeps, must be non-zero
/// * `stop` - One-shot termination signal
pub(crate) fn spawn_sweep_task<K, V>(
    shared: Arc<Shared<K, V>>,
    interval: Duration,
    mut stop: oneshot::Receiver<()>,
) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!("Starting sweep task with interval of {:?}", interval);

        let Some(start) = Instant::now().checked_add(interval) else {
            // No tick can ever fire, so only the stop signal matters
            warn!("Sweep interval of {:?} is out of range, sweeps disabled", interval);
            let _ = stop.await;
            info!("Sweep task stopped");
            return;
        };

        let mut ticker = time::interval_at(start, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = &mut stop => break,
                _ = ticker.tick() => {
                    let removed = shared.sweep().await;

                    if removed > 0 {
                        info!("Sweep: removed {} entries", removed);
                    } else {
                        debug!("Sweep: no entries removed");
                    }
                }
            }
        }

        info!("Sweep task stopped");
    })
}
