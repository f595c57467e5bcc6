//! Error type for construction-time contract violations
//!
//! Expected empty or missing conditions (popping an empty heap, looking up an
//! absent key, traversing from an unknown vertex) are reported with `Option`
//! or `bool` results, never through this type.

use thiserror::Error;

/// Errors raised when a structure is configured with invalid parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An LRU cache was requested with room for zero entries
    #[error("cache capacity must be at least 1")]
    ZeroCapacity,
}

/// Convenience alias for results carrying [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
