//! Differential tests: `Autocomplete` versus a linear-scan oracle.
//!
//! The oracle filters with `str::starts_with` and sorts by weight. The two
//! must return the same multiset of terms for every prefix, including
//! prefixes with multi-byte characters.

use super::common::{brute_force_matches, canonical};
use autocomplete::{Autocomplete, Term};
use proptest::prelude::*;

/// Mixed ASCII and multi-byte alphabet.
fn unicode_query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'é', 'ü', 'త', 'ె', '🦀']), 0..5)
        .prop_map(|chars| chars.into_iter().collect())
}

fn unicode_terms_strategy() -> impl Strategy<Value = Vec<Term>> {
    prop::collection::vec(
        (unicode_query_strategy(), 0u64..1000).prop_map(|(q, w)| Term::new(q, w)),
        0..40,
    )
}

proptest! {
    #[test]
    fn prop_same_multiset_as_oracle(
        terms in unicode_terms_strategy(),
        prefix in unicode_query_strategy()
    ) {
        let expected = canonical(brute_force_matches(&terms, &prefix));
        let ac = Autocomplete::new(terms);
        let got = canonical(ac.all_matches(&prefix));
        prop_assert_eq!(got, expected);
    }

    /// Prefixes taken from stored queries always find at least that query.
    #[test]
    fn prop_stored_prefix_found(terms in unicode_terms_strategy(), idx in any::<prop::sample::Index>(), cut in 0usize..6) {
        prop_assume!(!terms.is_empty());
        let term = &terms[idx.index(terms.len())];
        let prefix: String = term.query().chars().take(cut).collect();
        let ac = Autocomplete::from_slice(&terms);
        prop_assert!(ac.all_matches(&prefix).contains(term));
    }

    /// Batch answers equal one-at-a-time answers.
    #[test]
    fn prop_batch_matches_sequential(
        terms in unicode_terms_strategy(),
        prefixes in prop::collection::vec(unicode_query_strategy(), 0..8)
    ) {
        let ac = Autocomplete::new(terms);
        let batch = ac.all_matches_batch(&prefixes);
        let counts = ac.number_of_matches_batch(&prefixes);
        for (i, prefix) in prefixes.iter().enumerate() {
            prop_assert_eq!(&batch[i], &ac.all_matches(prefix));
            prop_assert_eq!(counts[i], ac.number_of_matches(prefix));
        }
    }
}
