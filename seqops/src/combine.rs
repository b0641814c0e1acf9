use tracing::trace;

/// Concatenate sequences in order into a new `Vec`.
///
/// Elements keep their order within and across the inputs; nothing is
/// deduplicated. No inputs give an empty `Vec`.
///
/// ```
/// let merged = seqops::merge([vec![1, 2, 3], vec![4, 5, 6]]);
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn merge<T, S, I>(sequences: I) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    I: IntoIterator<Item = S>,
{
    let sequences = sequences.into_iter().collect::<Vec<_>>();
    let mut merged =
        Vec::with_capacity(sequences.iter().map(|seq| seq.as_ref().len()).sum());
    for seq in &sequences {
        merged.extend_from_slice(seq.as_ref());
    }
    trace!(inputs = sequences.len(), len = merged.len(), "merged sequences");
    merged
}

/// Concatenate any mix of vectors, arrays and slices.
///
/// ```
/// use seqops::merge;
///
/// let tail = vec![5, 6];
/// assert_eq!(merge![[1, 2], &[3, 4][..], tail], vec![1, 2, 3, 4, 5, 6]);
/// let empty: Vec<i32> = merge![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! merge {
    () => {
        ::std::vec::Vec::new()
    };
    ($($seq:expr),+ $(,)?) => {
        $crate::combine::merge([$(&$seq[..]),+])
    };
}
