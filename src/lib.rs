// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked prefix autocomplete over a sorted term table.
//!
//! Given a prefix, return every stored query that starts with it, heaviest
//! first, and say how many there are. No trie, no hash index: one sort by
//! query, then two boundary binary searches per lookup.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │  types.rs   │────▶│   order.rs   │────▶│ autocomplete.rs │
//! │   (Term)    │     │ (natural,    │     │ (all_matches,   │
//! │             │     │  rev-weight, │     │  number_of_     │
//! └─────────────┘     │  prefix r)   │     │  matches)       │
//!                     └──────────────┘     └─────────────────┘
//!                                                   │
//!                                                   ▼
//!                     ┌──────────────────────────────────────┐
//!                     │              search/                 │
//!                     │ (first_index_of, last_index_of,      │
//!                     │  equal_range)                        │
//!                     └──────────────────────────────────────┘
//! ```
//!
//! `dataset` loads term files for the CLI; `verify` holds the debug contracts.
//!
//! # Usage
//!
//! ```
//! use autocomplete::{Autocomplete, Term};
//!
//! let ac = Autocomplete::new(vec![
//!     Term::new("cat", 5),
//!     Term::new("car", 10),
//!     Term::new("dog", 1),
//!     Term::new("carpet", 3),
//! ]);
//!
//! assert_eq!(ac.all_matches("car"), vec![Term::new("car", 10), Term::new("carpet", 3)]);
//! assert_eq!(ac.number_of_matches("ca"), 3);
//! assert_eq!(ac.number_of_matches("z"), 0);
//! ```

// Module declarations
mod autocomplete;
pub mod dataset;
mod error;
pub mod order;
mod search;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use autocomplete::Autocomplete;
pub use dataset::{load_path, parse_json, parse_terms, read_terms, LoadError};
pub use error::InvalidArgument;
pub use order::{by_natural_order, by_prefix_order, by_reverse_weight_order, PrefixOrder};
pub use search::{equal_range, first_index_of, last_index_of};
pub use types::{Term, Weight};
