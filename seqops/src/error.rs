use thiserror::Error;

/// A strict subsequence request that does not fit its sequence.
///
/// Only the checked operations such as [`try_slice`](crate::try_slice)
/// return this; the plain operations clamp instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// The start index lies past the end of the sequence.
    #[error("start index {start} is out of bounds for a sequence of length {len}")]
    StartOutOfBounds { start: usize, len: usize },
    /// The requested end lies past the end of the sequence.
    ///
    /// An end that overflows `usize` is reported as `usize::MAX`.
    #[error("end index {end} is out of bounds for a sequence of length {len}")]
    EndOutOfBounds { end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
