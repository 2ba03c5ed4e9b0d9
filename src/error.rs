use thiserror::Error;

/// Everything that can go wrong when poking at a collection. None of these
/// are transient: each one means the caller handed over a bad index or key.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// A positional operation was given an index outside the valid range.
    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A map lookup or erase asked for a key that isn't there.
    #[error("key not found")]
    KeyNotFound,

    /// A map insert was given a key that is already present.
    #[error("key is already present")]
    DuplicateKey,
}

pub type Result<T, E = CollectionError> = std::result::Result<T, E>;
