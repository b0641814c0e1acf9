//! Borrow contiguous runs out of a sequence.
//!
//! The plain operations never fail. A start at or past the end yields an
//! empty slice, and an end past the sequence is clamped to it. Use
//! [`try_slice`] when an overrun should be reported instead.
use tracing::trace;

use crate::error::{Error, Result};

/// How far a subsequence reaches from its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extent {
    /// At most this many elements.
    Count(usize),
    /// Every remaining element.
    ToEnd,
}

/// The elements from `start` up to `extent`, clamped to the sequence.
pub fn subsequence<T>(seq: &[T], start: usize, extent: Extent) -> &[T] {
    let len = seq.len();
    if start >= len {
        if start > len {
            trace!(start, len, "subsequence start past end");
        }
        return &seq[..0];
    }
    let end = match extent {
        Extent::ToEnd => len,
        Extent::Count(count) => match start.checked_add(count) {
            Some(end) if end <= len => end,
            _ => {
                trace!(start, count, len, "subsequence clamped to end");
                len
            }
        },
    };
    &seq[start..end]
}

/// Up to `count` elements beginning at `start`.
///
/// ```
/// assert_eq!(seqops::slice(&[1, 2, 3, 4, 5, 6], 2, 2), &[3, 4]);
/// assert_eq!(seqops::slice(&[1, 2, 3], 100, 0), &[1, 2, 3]);
/// assert!(seqops::slice(&[1, 2, 3], 1, 3).is_empty());
/// ```
pub fn slice<T>(seq: &[T], count: usize, start: usize) -> &[T] {
    subsequence(seq, start, Extent::Count(count))
}

/// The first `count` elements.
pub fn slice_to<T>(seq: &[T], count: usize) -> &[T] {
    slice(seq, count, 0)
}

/// Every element from `start` to the end.
pub fn slice_from<T>(seq: &[T], start: usize) -> &[T] {
    subsequence(seq, start, Extent::ToEnd)
}

/// [`slice`] for callers holding signed positions.
///
/// A negative `count` or `start` is treated as zero.
pub fn slice_signed<T>(seq: &[T], count: isize, start: isize) -> &[T] {
    let count = usize::try_from(count).unwrap_or(0);
    let start = usize::try_from(start).unwrap_or(0);
    slice(seq, count, start)
}

/// Exactly `count` elements beginning at `start`, or an error if they are
/// not all there.
///
/// A start equal to the length is allowed with a zero count.
pub fn try_slice<T>(seq: &[T], count: usize, start: usize) -> Result<&[T]> {
    let len = seq.len();
    if start > len {
        return Err(Error::StartOutOfBounds { start, len });
    }
    let end = start.saturating_add(count);
    if end > len {
        return Err(Error::EndOutOfBounds { end, len });
    }
    Ok(&seq[start..end])
}

/// The first element, if any.
pub fn head<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// Everything after the first element. Empty for an empty sequence.
pub fn tail<T>(seq: &[T]) -> &[T] {
    slice_from(seq, 1)
}
