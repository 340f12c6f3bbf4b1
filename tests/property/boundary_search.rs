//! Property tests for the boundary binary search.
//!
//! Verifies that:
//! 1. `first_index_of` / `last_index_of` match a linear scan on sorted input
//! 2. `first <= last` whenever a match exists, and both miss together
//! 3. Coarse comparators (many elements per class) still yield tight ranges

use autocomplete::{equal_range, first_index_of, last_index_of};
use proptest::prelude::*;
use std::cmp::Ordering;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Sorted sequences with plenty of duplicates.
fn sorted_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0i32..20, 0..60).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Keys that land inside, between, below and above the generated values.
fn key_strategy() -> impl Strategy<Value = i32> {
    -2i32..23
}

fn natural(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

// ============================================================================
// BOUNDARY SEARCH PROPERTIES
// ============================================================================

proptest! {
    /// Property: first/last agree with a linear scan
    #[test]
    fn prop_boundaries_match_linear_scan(seq in sorted_strategy(), key in key_strategy()) {
        let expected_first = seq.iter().position(|x| *x == key);
        let expected_last = seq.iter().rposition(|x| *x == key);

        prop_assert_eq!(first_index_of(&seq, &key, natural), expected_first);
        prop_assert_eq!(last_index_of(&seq, &key, natural), expected_last);
    }

    /// Property: first <= last, and "not found" is reported consistently
    #[test]
    fn prop_first_not_after_last(seq in sorted_strategy(), key in key_strategy()) {
        let first = first_index_of(&seq, &key, natural);
        let last = last_index_of(&seq, &key, natural);
        match (first, last) {
            (Some(f), Some(l)) => prop_assert!(f <= l, "first {} > last {}", f, l),
            (None, None) => {}
            other => prop_assert!(false, "inconsistent result {:?}", other),
        }
    }

    /// Property: equal_range covers exactly the equivalent elements
    #[test]
    fn prop_equal_range_is_exact(seq in sorted_strategy(), key in key_strategy()) {
        match equal_range(&seq, &key, natural) {
            Some(range) => {
                for i in 0..seq.len() {
                    prop_assert_eq!(range.contains(&i), seq[i] == key, "index {}", i);
                }
            }
            None => prop_assert!(!seq.contains(&key)),
        }
    }

    /// Property: a coarser comparator groups whole buckets
    ///
    /// Sorting by value is compatible with comparing by `value / 4`, the same
    /// relationship natural order has with every prefix order.
    #[test]
    fn prop_coarse_comparator_buckets(seq in sorted_strategy(), bucket in -1i32..7) {
        let by_bucket = |x: &i32, b: &i32| (x / 4).cmp(b);
        let expected: Vec<usize> = (0..seq.len()).filter(|&i| seq[i] / 4 == bucket).collect();

        match equal_range(&seq, &bucket, by_bucket) {
            Some(range) => prop_assert_eq!(range.collect::<Vec<_>>(), expected),
            None => prop_assert!(expected.is_empty()),
        }
    }

    /// Property: a sequence of identical elements spans 0..=n-1
    #[test]
    fn prop_all_equivalent(value in 0i32..5, len in 1usize..40) {
        let seq = vec![value; len];
        prop_assert_eq!(first_index_of(&seq, &value, natural), Some(0));
        prop_assert_eq!(last_index_of(&seq, &value, natural), Some(len - 1));
    }
}
