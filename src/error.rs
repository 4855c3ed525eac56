use thiserror::Error;

/// Errors reported by chain operations.
///
/// A failed operation never mutates the chain it was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The index is outside the bound accepted by the operation.
    #[error("index {index} out of range for chain of length {len}")]
    OutOfRange { index: usize, len: usize },
    /// A removal was requested on a chain with no elements.
    #[error("cannot delete from an empty chain")]
    EmptyCollection,
}

pub type Result<T, E = ChainError> = core::result::Result<T, E>;
