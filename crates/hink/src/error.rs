use thiserror::Error as ThisError;

///
/// Error
///
/// Failures raised synchronously at the offending call. Nothing is retried
/// internally; lookup misses and empty pops are `None`, not errors.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("capacity exceeded: all {limit} slots are filled")]
    CapacityExceeded { limit: usize },

    #[error("duplicate key")]
    DuplicateKey,

    #[error("index {index} is out of bounds for limit {limit}")]
    IndexOutOfBounds { index: usize, limit: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("format must contain exactly 32 `N` placeholders, found {placeholders}")]
    MalformedFormat { placeholders: usize },
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

///
/// TESTS
///
