//! Locate elements in a sequence.
//!
//! A miss is `None`. For multiple matches, the forward searches report the
//! lowest index and [`last_index_of`] the highest.

/// The index reported by [`Sentinel::to_sentinel`] when nothing was found.
pub const NOT_FOUND: isize = -1;

/// The index of the first element equal to `target`.
pub fn index_of<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    seq.iter().position(|item| item == target)
}

/// The index of the last element equal to `target`.
pub fn last_index_of<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    seq.iter().rposition(|item| item == target)
}

/// The index of the first element for which `predicate` holds.
pub fn find_index<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    seq.iter().position(|item| predicate(item))
}

/// The first element for which `predicate` holds.
///
/// A found default value (`Some(&0)`) is distinct from finding nothing.
pub fn find<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
    seq.iter().find(|item| predicate(*item))
}

/// Does the sequence hold an element equal to `target`?
///
/// Agrees with [`index_of`] by construction.
pub fn contains<T: PartialEq>(seq: &[T], target: &T) -> bool {
    index_of(seq, target).is_some()
}

/// Conversion of a search result to the `-1` index convention.
pub trait Sentinel {
    /// The index, or [`NOT_FOUND`] if there is none.
    fn to_sentinel(self) -> isize;
}

impl Sentinel for Option<usize> {
    fn to_sentinel(self) -> isize {
        match self {
            // only sequences of zero-sized types can be this long
            Some(index) => isize::try_from(index).unwrap_or(isize::MAX),
            None => NOT_FOUND,
        }
    }
}

/// Read an index in the `-1` convention. Any negative value is a miss.
pub fn from_sentinel(index: isize) -> Option<usize> {
    usize::try_from(index).ok()
}
