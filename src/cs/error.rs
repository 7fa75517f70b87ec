//! Error types shared by the `cs` algorithms.

/// Errors produced by the data structures in this crate.
///
/// Absent or duplicate values are not errors: `insert` and `remove` report
/// those through their `bool` return. Errors are reserved for calls that are
/// invalid in the collection's current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation is not valid in the current state, e.g. sampling an empty collection.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// An index source returned a position outside `[0, len)`.
    #[error("Index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The value store and position index disagree.
    #[error("Inconsistent state: {0}")]
    Inconsistent(String),
}

impl Error {
    pub fn invalid_state<S: Into<String>>(msg: S) -> Self {
        Error::InvalidState(msg.into())
    }

    pub fn inconsistent<S: Into<String>>(msg: S) -> Self {
        Error::Inconsistent(msg.into())
    }
}

/// Result type for `cs` operations
pub type Result<T> = std::result::Result<T, Error>;
