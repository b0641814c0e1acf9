use tracing::trace;

/// Apply `transform` to each element in order, collecting the results.
///
/// The result has the same length as `seq`.
pub fn map<T, R>(seq: &[T], transform: impl FnMut(&T) -> R) -> Vec<R> {
    seq.iter().map(transform).collect()
}

/// Apply `action` to each element in order.
pub fn for_each<T>(seq: &[T], action: impl FnMut(&T)) {
    seq.iter().for_each(action)
}

/// Reverse the sequence **in place** and hand the same slice back.
///
/// This mutates its argument. Copy first, or use [`flipped`], if the
/// original order is still needed.
///
/// ```
/// let mut items = vec![1, 2, 3, 4];
/// assert_eq!(seqops::flip(&mut items), &[4, 3, 2, 1]);
/// assert_eq!(items, vec![4, 3, 2, 1]);
/// ```
pub fn flip<T>(seq: &mut [T]) -> &mut [T] {
    trace!(len = seq.len(), "flip in place");
    seq.reverse();
    seq
}

/// A reversed copy of the sequence. The input is left as it is.
pub fn flipped<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}
