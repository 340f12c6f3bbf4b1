//! Concrete query scenarios with known answers.

use super::common::{build_autocomplete, cities, queries, sample_terms};
use autocomplete::{Autocomplete, Term};

#[test]
fn test_car_returns_car_then_carpet() {
    let ac = Autocomplete::new(sample_terms());
    assert_eq!(
        ac.all_matches("car"),
        vec![Term::new("car", 10), Term::new("carpet", 3)]
    );
}

#[test]
fn test_ca_counts_three() {
    let ac = Autocomplete::new(sample_terms());
    assert_eq!(ac.number_of_matches("ca"), 3);
}

#[test]
fn test_d_returns_dog() {
    let ac = Autocomplete::new(sample_terms());
    assert_eq!(ac.all_matches("d"), vec![Term::new("dog", 1)]);
}

#[test]
fn test_z_counts_zero() {
    let ac = Autocomplete::new(sample_terms());
    assert_eq!(ac.number_of_matches("z"), 0);
    assert!(ac.all_matches("z").is_empty());
}

#[test]
fn test_exact_key_matches_itself_and_extensions() {
    let ac = build_autocomplete(&[("car", 1), ("card", 2), ("care", 3), ("cart", 4), ("cars", 5)]);
    assert_eq!(ac.number_of_matches("car"), 5);
    assert_eq!(ac.number_of_matches("card"), 1);
    assert_eq!(queries(&ac.all_matches("car")), vec!["cars", "cart", "care", "card", "car"]);
}

#[test]
fn test_cities_prefixes() {
    let ac = cities();
    assert_eq!(
        queries(&ac.all_matches("Ber")),
        vec!["Berlin, Germany", "Bergen, Norway", "Bern, Switzerland"]
    );
    assert_eq!(ac.number_of_matches("Bo"), 5);
    assert_eq!(ac.number_of_matches("B"), 10);
    assert_eq!(ac.number_of_matches("Mu"), 2);
    assert_eq!(ac.number_of_matches("Mü"), 1);
    assert_eq!(ac.number_of_matches("M"), 4);
}

#[test]
fn test_cities_top_matches() {
    let ac = cities();
    let top = ac.top_matches("Bo", 2);
    assert_eq!(
        queries(&top),
        vec!["Bogotá, Colombia", "Boston, Massachusetts, United States"]
    );
}

#[test]
fn test_case_sensitive() {
    let ac = cities();
    assert_eq!(ac.number_of_matches("ber"), 0);
    assert_eq!(ac.number_of_matches("Ber"), 3);
}

#[test]
fn test_prefix_with_space_and_punctuation() {
    let ac = cities();
    assert_eq!(queries(&ac.all_matches("Bonn, ")), vec!["Bonn, Germany"]);
    assert_eq!(ac.number_of_matches("Bonn,G"), 0);
}
