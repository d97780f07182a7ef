//! End-to-end tests for population generation and timed runs

use pretty_assertions::assert_eq;
use propval::{compare, PropertyValue, Verdict};
use propval_bench::*;

fn debug_lines(population: &Population) -> Vec<String> {
    population
        .pairs()
        .map(|(l, r)| format!("{:?} {:?}", l, r))
        .collect()
}

#[test]
fn test_same_seed_same_population() {
    let config = BenchConfig::with_pairs(200)
        .seeded(99)
        .pairing(Pairing::AnyKind);
    let first = Population::seeded(&config).unwrap();
    let second = Population::seeded(&config).unwrap();
    assert_eq!(debug_lines(&first), debug_lines(&second));
}

#[test]
fn test_different_seed_different_population() {
    let first = Population::seeded(&BenchConfig::with_pairs(200).seeded(1)).unwrap();
    let second = Population::seeded(&BenchConfig::with_pairs(200).seeded(2)).unwrap();
    assert!(debug_lines(&first) != debug_lines(&second));
}

#[test]
fn test_mismatched_pairings_are_all_unordered() {
    for pairing in [Pairing::ObjectInt, Pairing::IntObject] {
        let config = BenchConfig::with_pairs(300).seeded(5).pairing(pairing);
        let report = run(&Population::seeded(&config).unwrap());
        assert_eq!(report.counts.unordered, 300);
    }
}

#[test]
fn test_matching_pairings_are_ordered() {
    for pairing in [Pairing::IntInt, Pairing::ObjectObject] {
        let config = BenchConfig::with_pairs(300).seeded(5).pairing(pairing);
        let report = run(&Population::seeded(&config).unwrap());
        assert_eq!(report.counts.unordered, 0);
        assert_eq!(report.counts.total(), 300);
    }
}

#[test]
fn test_report_matches_direct_comparison() {
    let config = BenchConfig::with_pairs(1_000).seeded(42);
    let population = Population::seeded(&config).unwrap();
    let report = run(&population);

    let expected: VerdictCounts = population
        .pairs()
        .map(|(l, r)| compare(l, r))
        .collect::<Vec<Verdict>>()
        .iter()
        .collect();
    assert_eq!(report.counts, expected);
    assert_eq!(report.pairs, 1_000);
}

#[test]
fn test_zero_pairs_is_an_error() {
    let err = Population::seeded(&BenchConfig::with_pairs(0)).unwrap_err();
    assert!(matches!(err, BenchError::InvalidConfig(_)));
}

#[test]
fn test_uneven_sides_cannot_reach_run() {
    let result = Population::from_sides(
        vec![PropertyValue::Int(1), PropertyValue::Int(2), PropertyValue::Int(3)],
        vec![PropertyValue::Int(1)],
    );
    assert!(matches!(
        result,
        Err(BenchError::MismatchedSides { lhs: 3, rhs: 1 })
    ));
}

#[test]
fn test_report_pairs_match_tally() {
    let population = Population::from_sides(
        vec![PropertyValue::Int(1), PropertyValue::Bool(true)],
        vec![PropertyValue::Int(1), PropertyValue::Int(0)],
    )
    .unwrap();
    let report = run(&population);
    assert_eq!(report.pairs, report.counts.total());
    assert_eq!(report.counts.equal, 1);
    assert_eq!(report.counts.unordered, 1);
}
