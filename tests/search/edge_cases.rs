//! Boundary conditions: empty inputs, long prefixes, duplicates, extremes.

use super::common::{build_autocomplete, queries, sample_terms};
use autocomplete::{Autocomplete, Term};

#[test]
fn test_empty_prefix_matches_every_term() {
    let ac = Autocomplete::new(sample_terms());
    assert_eq!(ac.number_of_matches(""), 4);
    assert_eq!(
        queries(&ac.all_matches("")),
        vec!["car", "cat", "carpet", "dog"]
    );
}

#[test]
fn test_prefix_longer_than_all_keys() {
    let ac = Autocomplete::new(sample_terms());
    assert_eq!(ac.number_of_matches("carpeting"), 0);
    assert!(ac.all_matches("nonexistent-prefix-xyz").is_empty());
}

#[test]
fn test_empty_table() {
    let ac = Autocomplete::new(Vec::new());
    assert_eq!(ac.len(), 0);
    assert_eq!(ac.number_of_matches(""), 0);
    assert_eq!(ac.number_of_matches("x"), 0);
}

#[test]
fn test_single_term_table() {
    let ac = build_autocomplete(&[("solo", 7)]);
    assert_eq!(ac.number_of_matches("s"), 1);
    assert_eq!(ac.number_of_matches("solo"), 1);
    assert_eq!(ac.number_of_matches("solos"), 0);
    assert_eq!(ac.number_of_matches("r"), 0);
    assert_eq!(ac.number_of_matches("t"), 0);
}

#[test]
fn test_empty_query_term() {
    let ac = build_autocomplete(&[("", 5), ("a", 1)]);
    // The empty query only matches the empty prefix.
    assert_eq!(ac.number_of_matches(""), 2);
    assert_eq!(ac.all_matches("a"), vec![Term::new("a", 1)]);
}

#[test]
fn test_duplicate_queries_are_kept() {
    let ac = build_autocomplete(&[("dup", 1), ("dup", 9), ("dup", 4)]);
    assert_eq!(ac.number_of_matches("dup"), 3);
    let weights: Vec<u64> = ac.all_matches("d").iter().map(Term::weight).collect();
    assert_eq!(weights, vec![9, 4, 1]);
}

#[test]
fn test_match_run_at_table_edges() {
    let ac = build_autocomplete(&[("aa", 1), ("ab", 2), ("ba", 3), ("zz", 4), ("zy", 5)]);
    assert_eq!(ac.match_range("a"), Some(0..=1));
    assert_eq!(ac.match_range("z"), Some(3..=4));
    assert_eq!(ac.match_range("b"), Some(2..=2));
    assert_eq!(ac.match_range("c"), None);
}

#[test]
fn test_maximum_weight() {
    let ac = build_autocomplete(&[("big", u64::MAX), ("small", 0)]);
    assert_eq!(ac.all_matches("")[0], Term::new("big", u64::MAX));
}

#[test]
fn test_multibyte_prefix_does_not_split_characters() {
    let ac = build_autocomplete(&[("🦀 crab", 2), ("🦀", 1), ("🦊 fox", 3)]);
    assert_eq!(ac.number_of_matches("🦀"), 2);
    assert_eq!(ac.number_of_matches("🦊"), 1);
    assert_eq!(ac.number_of_matches("🦀 c"), 1);
}

#[test]
fn test_input_order_does_not_matter() {
    let forward = Autocomplete::new(sample_terms());
    let mut reversed_input = sample_terms();
    reversed_input.reverse();
    let reversed = Autocomplete::new(reversed_input);
    assert_eq!(forward.terms(), reversed.terms());
}
