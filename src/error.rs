// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Precondition failures for the in-memory core.
//!
//! Every failure here is a caller mistake on a pure computation: nothing is
//! retried and nothing needs rolling back. Absent references (a missing term
//! table, prefix, sequence or comparator) cannot be expressed in safe Rust, so
//! only the numeric preconditions survive as runtime errors.

use std::fmt;

/// Error type for rejected arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A term was constructed with a weight below zero.
    NegativeWeight { query: String, weight: i64 },
    /// A prefix order was requested with a length below zero.
    NegativePrefixLength { length: i64 },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NegativeWeight { query, weight } => {
                write!(f, "illegal weight {} for query '{}'", weight, query)
            }
            InvalidArgument::NegativePrefixLength { length } => {
                write!(f, "illegal prefix length {}", length)
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}
