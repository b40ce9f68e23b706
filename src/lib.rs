//! Cleaning Register - A map that sweeps itself
//!
//! Provides a thread-safe in-memory key/value register whose entries are
//! removed by a periodic background sweep instead of on access or expiry.

pub mod config;
pub mod error;
pub mod register;
mod tasks;

pub use config::Config;
pub use error::{RegisterError, Result};
pub use register::{CleaningRegister, Removed, ShouldRemove, SweepStats};
