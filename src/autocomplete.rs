// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix autocomplete over an owned, sorted term table.
//!
//! Construction sorts once by natural order. Every query after that is two
//! boundary searches plus a copy of the matching run:
//!
//! ```text
//! prefix "car" ──▶ PrefixOrder(3) ──▶ equal_range ──▶ terms[first..=last]
//!                                                          │
//!                                          clone + sort by reverse weight
//!                                                          ▼
//!                                          [("car",10), ("carpet",3)]
//! ```
//!
//! The table is never touched after construction. Queries allocate their own
//! working copy, so a shared `&Autocomplete` can serve any number of threads.
//!
//! # Invariants
//!
//! - **TABLE_SORTED**: `terms` is sorted by natural order for the lifetime of the value.
//! - **TABLE_OWNED**: `terms` is never aliased by the caller; there is no `&mut` accessor.

use crate::order::{by_natural_order, by_reverse_weight_order, PrefixOrder};
use crate::search::equal_range;
use crate::types::Term;
use crate::verify::contracts::{check_match_range, check_sorted_by, check_weight_descending};
use std::ops::RangeInclusive;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Answers prefix queries over a fixed set of weighted terms.
#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    terms: Vec<Term>,
}

impl Autocomplete {
    /// Take ownership of `terms` and sort them by natural order.
    ///
    /// O(n log n). Passing the vector by value is the defensive copy: the
    /// caller cannot mutate what it no longer owns.
    pub fn new(mut terms: Vec<Term>) -> Self {
        terms.sort_by(by_natural_order());
        check_sorted_by(&terms, by_natural_order());
        tracing::debug!(terms = terms.len(), "built autocomplete table");
        Self { terms }
    }

    /// Clone `terms` into a new table, leaving the caller's slice alone.
    pub fn from_slice(terms: &[Term]) -> Self {
        Self::new(terms.to_vec())
    }

    /// The sorted table, read-only.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Inclusive index range of the terms starting with `prefix`, or `None`.
    pub fn match_range(&self, prefix: &str) -> Option<RangeInclusive<usize>> {
        let key = Term::from_prefix(prefix);
        let order = PrefixOrder::new(prefix.chars().count());
        let range = equal_range(&self.terms, &key, |a, b| order.compare(a, b))?;
        check_match_range(&self.terms, &key, &range, |a, b| order.compare(a, b));
        tracing::trace!(prefix, first = range.start(), last = range.end(), "matched");
        Some(range)
    }

    /// All terms starting with `prefix`, highest weight first.
    ///
    /// Empty when nothing matches. Equal weights keep their natural-order
    /// position because the extracted run is already sorted by query and
    /// `sort_by` is stable.
    pub fn all_matches(&self, prefix: &str) -> Vec<Term> {
        let Some(range) = self.match_range(prefix) else {
            return Vec::new();
        };
        let mut matches = self.terms[range].to_vec();
        matches.sort_by(by_reverse_weight_order());
        check_weight_descending(&matches);
        matches
    }

    /// Number of terms starting with `prefix`. Zero is a normal answer.
    pub fn number_of_matches(&self, prefix: &str) -> usize {
        self.match_range(prefix)
            .map_or(0, |range| range.end() - range.start() + 1)
    }

    /// The `k` heaviest terms starting with `prefix`.
    pub fn top_matches(&self, prefix: &str, k: usize) -> Vec<Term> {
        let mut matches = self.all_matches(prefix);
        matches.truncate(k);
        matches
    }

    /// [`all_matches`](Self::all_matches) for each prefix, in input order.
    pub fn all_matches_batch<S: AsRef<str> + Sync>(&self, prefixes: &[S]) -> Vec<Vec<Term>> {
        #[cfg(feature = "parallel")]
        let iter = prefixes.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = prefixes.iter();

        iter.map(|p| self.all_matches(p.as_ref())).collect()
    }

    /// [`number_of_matches`](Self::number_of_matches) for each prefix, in input order.
    pub fn number_of_matches_batch<S: AsRef<str> + Sync>(&self, prefixes: &[S]) -> Vec<usize> {
        #[cfg(feature = "parallel")]
        let iter = prefixes.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = prefixes.iter();

        iter.map(|p| self.number_of_matches(p.as_ref())).collect()
    }
}

impl From<Vec<Term>> for Autocomplete {
    fn from(terms: Vec<Term>) -> Self {
        Self::new(terms)
    }
}

impl FromIterator<Term> for Autocomplete {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
