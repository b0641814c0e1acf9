use proptest::prelude::*;
use seqops::{
    contains, find, find_index, flip, index_of, last_index_of, map, merge, slice, slice_from,
    slice_to, Sentinel, NOT_FOUND,
};

fn items() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20..20i32, 0..40)
}

proptest! {
    #[test]
    fn index_of_points_at_target(seq in items(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!seq.is_empty());
        let target = seq[pick.index(seq.len())];
        let index = index_of(&seq, &target);
        prop_assert!(index.is_some());
        prop_assert_eq!(seq[index.unwrap()], target);
    }

    #[test]
    fn contains_agrees_with_index_of(seq in items(), target in -25..25i32) {
        prop_assert_eq!(contains(&seq, &target), index_of(&seq, &target).is_some());
        prop_assert_eq!(
            index_of(&seq, &target).to_sentinel() == NOT_FOUND,
            !contains(&seq, &target)
        );
    }

    #[test]
    fn last_index_not_before_first(seq in items(), target in -25..25i32) {
        match (index_of(&seq, &target), last_index_of(&seq, &target)) {
            (Some(first), Some(last)) => prop_assert!(first <= last),
            (None, None) => {}
            _ => prop_assert!(false, "forward and backward search disagree"),
        }
    }

    #[test]
    fn find_agrees_with_find_index(seq in items(), bound in -25..25i32) {
        let found = find(&seq, |&x| x > bound);
        let index = find_index(&seq, |&x| x > bound);
        prop_assert_eq!(found, index.map(|i| &seq[i]));
    }

    #[test]
    fn map_preserves_length(seq in items()) {
        let mapped = map(&seq, |x| i64::from(*x) * 2);
        prop_assert_eq!(mapped.len(), seq.len());
    }

    #[test]
    fn flip_is_an_involution(seq in items()) {
        let mut flipped = seq.clone();
        flip(flip(&mut flipped));
        prop_assert_eq!(flipped, seq);
    }

    #[test]
    fn merge_is_associative(a in items(), b in items(), c in items()) {
        let left = merge([merge([&a, &b]), c.clone()]);
        let right = merge([a.clone(), merge([&b, &c])]);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn merge_length_is_sum(a in items(), b in items()) {
        prop_assert_eq!(merge([&a, &b]).len(), a.len() + b.len());
    }

    #[test]
    fn slice_at_len_is_empty(seq in items(), count in 0..100usize) {
        prop_assert!(slice(&seq, count, seq.len()).is_empty());
    }

    #[test]
    fn slice_overrun_is_clamped(seq in items()) {
        prop_assert_eq!(slice(&seq, 100, 0), seq.as_slice());
    }

    #[test]
    fn slice_to_and_from_split(seq in items(), at in 0..50usize) {
        let rejoined = merge([slice_to(&seq, at), slice_from(&seq, at)]);
        prop_assert_eq!(rejoined, seq);
    }

    #[test]
    fn slice_never_longer_than_count(seq in items(), count in 0..50usize, start in 0..50usize) {
        prop_assert!(slice(&seq, count, start).len() <= count);
    }
}
