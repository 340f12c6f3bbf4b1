//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Term;

/// Build terms from `(query, weight)` pairs.
pub fn make_terms(pairs: &[(&str, u64)]) -> Vec<Term> {
    pairs.iter().map(|&(q, w)| Term::new(q, w)).collect()
}

/// The four-term fixture used throughout the docs and tests.
pub fn sample_terms() -> Vec<Term> {
    make_terms(&[("cat", 5), ("car", 10), ("dog", 1), ("carpet", 3)])
}

/// Linear-scan oracle: every term whose query starts with `prefix`.
pub fn brute_force_matches(terms: &[Term], prefix: &str) -> Vec<Term> {
    terms
        .iter()
        .filter(|t| t.starts_with(prefix))
        .cloned()
        .collect()
}

/// Render terms in the dataset text format.
pub fn to_dataset_text(terms: &[Term]) -> String {
    let mut out = format!("{}\n", terms.len());
    for term in terms {
        out.push_str(&format!("{:>14}\t{}\n", term.weight(), term.query()));
    }
    out
}
