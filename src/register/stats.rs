//! Sweep Statistics Module
//!
//! Tracks how much work the background sweep has done.

use serde::Serialize;

// == Sweep Stats ==
/// Counters describing sweep activity for one register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepStats {
    /// Number of completed sweep passes
    pub sweeps: u64,
    /// Number of entries removed by sweeps (pops are not counted)
    pub removed: u64,
    /// Current number of entries in the register
    pub total_entries: usize,
}

impl SweepStats {
    // == Constructor ==
    /// Creates a new SweepStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Sweep ==
    /// Records one finished sweep pass that removed `removed` entries.
    pub fn record_sweep(&mut self, removed: usize) {
        self.sweeps += 1;
        self.removed += removed as u64;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
