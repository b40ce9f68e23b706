//! Error types for the cleaning register
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Register Error Enum ==
/// Errors raised while constructing a register.
///
/// Data operations never fail; a missing key is reported as `None`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegisterError {
    /// The cleanup interval must be a positive duration
    #[error("Cleanup interval must be greater than zero")]
    ZeroInterval,

    /// The sweep task needs a tokio runtime to be spawned on
    #[error("No tokio runtime available to run the sweep task")]
    NoRuntime,
}

// == Result Type Alias ==
/// Convenience Result type for the cleaning register.
pub type Result<T> = std::result::Result<T, RegisterError>;
