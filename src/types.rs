// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building block of an autocomplete table: a weighted query string.
//!
//! A `Term` is immutable once built. Weights are `u64`, so the "weight is
//! never negative" invariant holds by construction; signed inputs go through
//! [`Term::try_new`], which is where negative values get rejected.
//!
//! # Invariants
//!
//! - **Weight**: `weight >= 0`. Enforced by the type for `new`, checked for `try_new`.
//! - **Query**: always present, possibly empty. Never trimmed or normalized here;
//!   that is the loader's job.

use crate::error::InvalidArgument;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ranking weight attached to a query.
pub type Weight = u64;

/// A query string paired with its weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    query: String,
    weight: Weight,
}

impl Term {
    /// Build a term from a query and a non-negative weight.
    pub fn new(query: impl Into<String>, weight: Weight) -> Self {
        Self {
            query: query.into(),
            weight,
        }
    }

    /// Build a term from a signed weight, rejecting negatives.
    pub fn try_new(query: impl Into<String>, weight: i64) -> Result<Self, InvalidArgument> {
        let query = query.into();
        match Weight::try_from(weight) {
            Ok(weight) => Ok(Self { query, weight }),
            Err(_) => Err(InvalidArgument::NegativeWeight { query, weight }),
        }
    }

    /// A weight-0 term used only as a search key.
    pub fn from_prefix(prefix: impl Into<String>) -> Self {
        Self::new(prefix, 0)
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The first `r` characters of the query, or all of it when shorter.
    ///
    /// Counts Unicode scalar values, not bytes, so the cut never lands inside
    /// a multi-byte character.
    pub fn prefix_of(&self, r: usize) -> &str {
        self.query
            .char_indices()
            .nth(r)
            .map(|(byte_idx, _)| &self.query[..byte_idx])
            .unwrap_or(&self.query)
    }

    /// Whether the query starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.query.starts_with(prefix)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.weight, self.query)
    }
}

impl From<(&str, Weight)> for Term {
    fn from((query, weight): (&str, Weight)) -> Self {
        Term::new(query, weight)
    }
}
