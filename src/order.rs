// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Orderings over terms.
//!
//! Three comparators, each usable with `slice::sort_by` and with the boundary
//! search in [`crate::search`]:
//!
//! | Ordering        | Compares                              | Used for                   |
//! |-----------------|---------------------------------------|----------------------------|
//! | natural         | whole query, ordinal                  | sorting the owned table    |
//! | reverse weight  | weight, highest first                 | ranking extracted matches  |
//! | prefix of `r`   | first `min(r, len)` characters        | locating a prefix's range  |
//!
//! Ordinal means UTF-8 byte order, which is the same as code point order. No
//! locale rules, no case folding.
//!
//! The prefix order agrees with the natural order on the truncated portion,
//! so a table sorted by natural order is also sorted by every prefix order.
//! That compatibility is what lets one sort serve every prefix length.

use crate::error::InvalidArgument;
use crate::types::Term;
use std::cmp::Ordering;

/// Lexicographic order of queries.
pub fn by_natural_order() -> impl Fn(&Term, &Term) -> Ordering + Copy {
    |a, b| a.query().cmp(b.query())
}

/// Descending order of weights. Equal weights compare `Equal`; a stable sort
/// leaves them in their incoming order.
pub fn by_reverse_weight_order() -> impl Fn(&Term, &Term) -> Ordering + Copy {
    |a, b| b.weight().cmp(&a.weight())
}

/// Order by the first `r` characters of each query.
pub fn by_prefix_order(r: usize) -> impl Fn(&Term, &Term) -> Ordering + Copy {
    let order = PrefixOrder::new(r);
    move |a, b| order.compare(a, b)
}

/// Prefix-of-length-`r` comparator carrying its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixOrder {
    r: usize,
}

impl PrefixOrder {
    pub fn new(r: usize) -> Self {
        Self { r }
    }

    /// Prefix length this order truncates to.
    pub fn len(&self) -> usize {
        self.r
    }

    pub fn is_empty(&self) -> bool {
        self.r == 0
    }

    /// Compare `v` and `w` by their first `min(r, len)` characters.
    pub fn compare(&self, v: &Term, w: &Term) -> Ordering {
        v.prefix_of(self.r).cmp(w.prefix_of(self.r))
    }
}

impl TryFrom<i64> for PrefixOrder {
    type Error = InvalidArgument;

    fn try_from(length: i64) -> Result<Self, Self::Error> {
        usize::try_from(length)
            .map(PrefixOrder::new)
            .map_err(|_| InvalidArgument::NegativePrefixLength { length })
    }
}
