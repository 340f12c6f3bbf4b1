// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode assertions for the autocomplete invariants.
//!
//! 1. **Zero-cost in release builds** (everything goes through `debug_assert!`)
//! 2. **Early failure detection** while tests run
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Invariant                                          |
//! |----------------------------|----------------------------------------------------|
//! | `check_sorted_by`          | owned table is sorted by natural order             |
//! | `check_match_range`        | boundary search returned the whole class, no more  |
//! | `check_weight_descending`  | ranked matches are in non-increasing weight order  |
//!
//! # Usage
//!
//! ```ignore
//! use autocomplete::verify::contracts::*;
//!
//! // In debug builds, this panics if the table is out of order
//! check_sorted_by(&terms, by_natural_order());
//! ```

use crate::types::Term;
use std::cmp::Ordering;
use std::ops::RangeInclusive;

// ============================================================================
// ORDERING CONTRACTS
// ============================================================================

/// Check that `seq` is sorted by `cmp`.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair compares `Greater`.
#[inline]
pub fn check_sorted_by<T, F>(seq: &[T], mut cmp: F)
where
    T: std::fmt::Debug,
    F: FnMut(&T, &T) -> Ordering,
{
    if cfg!(debug_assertions) {
        for i in 1..seq.len() {
            debug_assert!(
                cmp(&seq[i - 1], &seq[i]) != Ordering::Greater,
                "Contract violation: Sorted - seq[{}] ({:?}) > seq[{}] ({:?})",
                i - 1,
                seq[i - 1],
                i,
                seq[i]
            );
        }
    }
}

/// Check that ranked matches never increase in weight.
///
/// # Panics (debug builds only)
/// Panics if `matches[i].weight < matches[i + 1].weight` for some `i`.
#[inline]
pub fn check_weight_descending(matches: &[Term]) {
    if cfg!(debug_assertions) {
        for (i, pair) in matches.windows(2).enumerate() {
            debug_assert!(
                pair[0].weight() >= pair[1].weight(),
                "Contract violation: WeightDescending - matches[{}] weight {} < matches[{}] weight {}",
                i,
                pair[0].weight(),
                i + 1,
                pair[1].weight()
            );
        }
    }
}

// ============================================================================
// BOUNDARY SEARCH CONTRACTS
// ============================================================================

/// Check that `range` is exactly the equivalence class of `key` in `seq`.
///
/// Both ends must be equivalent to the key, and the neighbours just outside
/// the range must not be. Given a sorted `seq` that is enough to prove the
/// whole class was captured.
///
/// # Panics (debug builds only)
/// Panics if the range is loose or cuts the class short.
#[inline]
pub fn check_match_range<T, K, F>(seq: &[T], key: &K, range: &RangeInclusive<usize>, mut cmp: F)
where
    K: ?Sized,
    F: FnMut(&T, &K) -> Ordering,
{
    if cfg!(debug_assertions) {
        let (first, last) = (*range.start(), *range.end());
        debug_assert!(
            first <= last && last < seq.len(),
            "Contract violation: MatchRange - {}..={} out of bounds for len {}",
            first,
            last,
            seq.len()
        );
        debug_assert!(
            cmp(&seq[first], key) == Ordering::Equal && cmp(&seq[last], key) == Ordering::Equal,
            "Contract violation: MatchRange - endpoints {}..={} not equivalent to key",
            first,
            last
        );
        if first > 0 {
            debug_assert!(
                cmp(&seq[first - 1], key) == Ordering::Less,
                "Contract violation: MatchRange - seq[{}] is equivalent but was left out",
                first - 1
            );
        }
        if last + 1 < seq.len() {
            debug_assert!(
                cmp(&seq[last + 1], key) == Ordering::Greater,
                "Contract violation: MatchRange - seq[{}] is equivalent but was left out",
                last + 1
            );
        }
    }
}
