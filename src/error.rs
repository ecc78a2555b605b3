use thiserror::Error;

/// The error returned by [`StableVector::at`](crate::StableVector::at) and
/// [`StableVector::at_mut`](crate::StableVector::at_mut) when the requested index is not
/// below the current length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("index {index} is out of range for a stable vector of length {len}")]
pub struct OutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The length of the vector at the time of the request.
    pub len: usize,
}
