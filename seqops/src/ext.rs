use crate::error::Result;
use crate::{search, subsequence, transform};

/// The sequence operations as methods on slices.
///
/// Methods that would be shadowed by an inherent slice or array method carry
/// an `_ext` suffix.
///
/// ```
/// use seqops::SequenceExt;
///
/// let items = [1, 2, 3, 4];
/// assert_eq!(items.index_of(&3), Some(2));
/// assert_eq!(items.map_ext(|x| x * 10), vec![10, 20, 30, 40]);
/// assert_eq!(items.slice_from(1), &[2, 3, 4]);
/// ```
pub trait SequenceExt<T> {
    fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq;

    fn last_index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq;

    fn find_index(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize>;

    fn find_ext(&self, predicate: impl FnMut(&T) -> bool) -> Option<&T>;

    fn contains_ext(&self, target: &T) -> bool
    where
        T: PartialEq;

    fn map_ext<R>(&self, op: impl FnMut(&T) -> R) -> Vec<R>;

    fn for_each_ext(&self, action: impl FnMut(&T));

    /// Reverses in place, like [`flip`](crate::flip).
    fn flip(&mut self) -> &mut Self;

    fn flipped(&self) -> Vec<T>
    where
        T: Clone;

    fn slice(&self, count: usize, start: usize) -> &[T];

    fn slice_to(&self, count: usize) -> &[T];

    fn slice_from(&self, start: usize) -> &[T];

    fn try_slice(&self, count: usize, start: usize) -> Result<&[T]>;
}

impl<T> SequenceExt<T> for [T] {
    fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        search::index_of(self, target)
    }

    fn last_index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        search::last_index_of(self, target)
    }

    fn find_index(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        search::find_index(self, predicate)
    }

    fn find_ext(&self, predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        search::find(self, predicate)
    }

    fn contains_ext(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        search::contains(self, target)
    }

    fn map_ext<R>(&self, op: impl FnMut(&T) -> R) -> Vec<R> {
        transform::map(self, op)
    }

    fn for_each_ext(&self, action: impl FnMut(&T)) {
        transform::for_each(self, action)
    }

    fn flip(&mut self) -> &mut Self {
        transform::flip(self)
    }

    fn flipped(&self) -> Vec<T>
    where
        T: Clone,
    {
        transform::flipped(self)
    }

    fn slice(&self, count: usize, start: usize) -> &[T] {
        subsequence::slice(self, count, start)
    }

    fn slice_to(&self, count: usize) -> &[T] {
        subsequence::slice_to(self, count)
    }

    fn slice_from(&self, start: usize) -> &[T] {
        subsequence::slice_from(self, start)
    }

    fn try_slice(&self, count: usize, start: usize) -> Result<&[T]> {
        subsequence::try_slice(self, count, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_on_vec() {
        let mut items = vec![1, 2, 3, 4, 3];
        assert_eq!(items.index_of(&3), Some(2));
        assert_eq!(items.last_index_of(&3), Some(4));
        assert_eq!(items.find_index(|&x| x > 3), Some(3));
        assert_eq!(items.find_ext(|&x| x > 3), Some(&4));
        assert!(items.contains_ext(&1));
        assert_eq!(items.slice(2, 1), &[2, 3]);
        assert_eq!(items.slice_to(2), &[1, 2]);
        assert_eq!(items.flipped(), vec![3, 4, 3, 2, 1]);
        items.flip();
        assert_eq!(items, vec![3, 4, 3, 2, 1]);
    }

    #[test]
    fn test_for_each_ext() {
        let mut total = 0;
        [1, 2, 3].for_each_ext(|x| total += x);
        assert_eq!(total, 6);
    }

    #[test]
    fn test_try_slice_method() {
        let items = [1, 2, 3];
        assert!(items.try_slice(4, 0).is_err());
        assert_eq!(items.try_slice(2, 1), Ok(&items[1..]));
    }
}
