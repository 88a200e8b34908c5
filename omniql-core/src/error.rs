//! Error types for OmniQL runtime readers.

use thiserror::Error;

/// Core error type for OmniQL reader operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Index outside `[0, len)` passed to a vector reader.
    #[error("vector index {index} out of range for vector of length {len}")]
    VectorInvalidIndex {
        /// Requested index.
        index: isize,
        /// Vector length at the time of the access.
        len: usize,
    },
}

impl Error {
    /// Returns true if this error reports an out-of-range vector access.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::VectorInvalidIndex { .. })
    }
}

/// Result type alias for OmniQL reader operations.
pub type Result<T> = std::result::Result<T, Error>;
