//! Register Module
//!
//! Provides the cleaning register: a locked map plus the background sweep
//! that evicts entries on a fixed schedule.

mod handle;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use handle::CleaningRegister;
pub use stats::SweepStats;

pub(crate) use shared::Shared;
pub(crate) use store::RegisterStore;

// == Caller Hooks ==
/// Decides during a sweep whether an entry should be removed.
pub type ShouldRemove<K, V> = Box<dyn Fn(&K, &V) -> bool + Send + Sync>;

/// Receives each entry a sweep removed, after it has left the map.
pub type Removed<K, V> = Box<dyn Fn(K, V) + Send + Sync>;
