// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boundary binary search over comparator-sorted slices.
//!
//! Ordinary binary search answers "is this value here?". Autocomplete needs a
//! different question answered: "where does the run of elements equivalent to
//! this key start, and where does it end?". The comparator decides what
//! equivalent means. With a prefix order, every term sharing the first `r`
//! characters of the key compares `Equal`, so the run is exactly the set of
//! completions.
//!
//! # Preconditions
//!
//! The slice must be sorted by an order that agrees with `cmp`: every element
//! comparing `Less` to the key sits before every element comparing `Equal`,
//! which sits before every element comparing `Greater`. Given that, both
//! searches are exact and use at most `ceil(log2(n + 1)) + 1` comparisons.
//!
//! # Not found
//!
//! `None` is the only "not found" signal. There is no `-1` sentinel to confuse
//! with index 0.
//!
//! ```
//! use autocomplete::{first_index_of, last_index_of};
//!
//! let xs = [1, 3, 3, 3, 7];
//! assert_eq!(first_index_of(&xs, &3, |a, b| a.cmp(b)), Some(1));
//! assert_eq!(last_index_of(&xs, &3, |a, b| a.cmp(b)), Some(3));
//! assert_eq!(first_index_of(&xs, &4, |a, b| a.cmp(b)), None);
//! ```

use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// Smallest index `i` with `cmp(&seq[i], key) == Equal`, or `None`.
///
/// Converges on the leftmost element comparing `>= Equal`, then checks that
/// the element it landed on is actually equivalent.
pub fn first_index_of<T, K, F>(seq: &[T], key: &K, mut cmp: F) -> Option<usize>
where
    K: ?Sized,
    F: FnMut(&T, &K) -> Ordering,
{
    // [0, lo) compares Less, [hi, len) compares Equal or Greater
    let mut lo = 0usize;
    let mut hi = seq.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cmp(&seq[mid], key) == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    if lo < seq.len() && cmp(&seq[lo], key) == Ordering::Equal {
        Some(lo)
    } else {
        None
    }
}

/// Largest index `i` with `cmp(&seq[i], key) == Equal`, or `None`.
///
/// Mirror image of [`first_index_of`]: converges on the rightmost element
/// comparing `<= Equal`.
pub fn last_index_of<T, K, F>(seq: &[T], key: &K, mut cmp: F) -> Option<usize>
where
    K: ?Sized,
    F: FnMut(&T, &K) -> Ordering,
{
    // [0, lo) compares Less or Equal, [hi, len) compares Greater
    let mut lo = 0usize;
    let mut hi = seq.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cmp(&seq[mid], key) == Ordering::Greater {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    let last = lo.checked_sub(1)?;
    if cmp(&seq[last], key) == Ordering::Equal {
        Some(last)
    } else {
        None
    }
}

/// Both boundaries of the equivalence class of `key`, inclusive.
///
/// The second search only looks at the tail starting at the first match, so
/// a hit costs at most two logarithmic passes and a miss costs one.
pub fn equal_range<T, K, F>(seq: &[T], key: &K, mut cmp: F) -> Option<RangeInclusive<usize>>
where
    K: ?Sized,
    F: FnMut(&T, &K) -> Ordering,
{
    let first = first_index_of(seq, key, &mut cmp)?;
    let offset = last_index_of(&seq[first..], key, &mut cmp)?;
    Some(first..=first + offset)
}
