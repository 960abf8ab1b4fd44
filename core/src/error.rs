//! Error types for state restoration.

use thiserror::Error;

/// Errors produced when rebuilding a generator from a saved state.
///
/// Invalid arguments to generation methods (empty ranges, non-finite
/// bounds) are programming errors and panic instead; only data that
/// crosses a serialization boundary is recoverable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RngError {
    /// The byte length of a saved state does not match the generator's
    /// layout.
    #[error("invalid state size: expected {expected} bytes, got {actual}")]
    InvalidStateSize {
        /// Byte length the generator serializes to.
        expected: usize,
        /// Byte length actually supplied.
        actual: usize,
    },
}
