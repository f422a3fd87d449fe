//! End-to-end tests of the public extseq surface.

use extseq::{Error, IndexingPolicy, SequenceExt, element_at, repeat};
use pretty_assertions::assert_eq;

// =============================================================================
// element_at — reference scenario over [10, 20, 30]
// =============================================================================

#[test]
fn indexing_reference_scenario() {
    let s = [10, 20, 30];

    assert_eq!(element_at(s, -1, IndexingPolicy::Cyclic), Ok(30));
    assert_eq!(element_at(s, 5, IndexingPolicy::Cyclic), Ok(30));
    assert_eq!(element_at(s, -1, IndexingPolicy::Clamp), Ok(10));
    assert_eq!(element_at(s, 99, IndexingPolicy::Clamp), Ok(30));
    assert_eq!(element_at(s, 1, IndexingPolicy::Default), Ok(20));
    assert_eq!(
        element_at(s, 5, IndexingPolicy::Default),
        Err(Error::IndexOutOfRange { index: 5, len: 3 })
    );
}

#[test]
fn clamp_matches_default_at_the_borders() {
    let s = ["a", "b", "c", "d"];
    let last = s.len() as isize - 1;

    for i in [-50, -1, 0] {
        assert_eq!(
            element_at(s, i, IndexingPolicy::Clamp),
            element_at(s, 0, IndexingPolicy::Default)
        );
    }
    for i in [last, last + 1, last + 50] {
        assert_eq!(
            element_at(s, i, IndexingPolicy::Clamp),
            element_at(s, last, IndexingPolicy::Default)
        );
    }
}

#[test]
fn element_at_works_on_lazy_sources() {
    let squares = (1..).map(|n| n * n).take(10);
    assert_eq!(squares.element_at(-1, IndexingPolicy::Cyclic), Ok(100));
}

#[test]
fn empty_source_is_rejected_before_index_resolution() {
    let empty: [i32; 0] = [];
    for policy in [
        IndexingPolicy::Default,
        IndexingPolicy::Cyclic,
        IndexingPolicy::Clamp,
    ] {
        let err = element_at(empty, 0, policy).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                name: "source",
                reason: "must not be empty",
            }
        );
        // The message names the offending parameter.
        assert!(err.to_string().contains("`source`"));
    }
}

// =============================================================================
// repeat — reference scenario over [1, 2]
// =============================================================================

#[test]
fn repetition_reference_scenario() {
    let repeated: Vec<i32> = repeat([1, 2], 3).collect();
    assert_eq!(repeated, vec![1, 2, 1, 2, 1, 2]);
}

#[test]
fn repetition_concatenates_copies_in_order() {
    let s = vec!["x".to_string(), "y".to_string(), "z".to_string()];
    for count in 0..4 {
        let mut expected = Vec::new();
        for _ in 0..count {
            expected.extend(s.iter().cloned());
        }
        let repeated: Vec<String> = s.iter().cloned().repeat_seq(count).collect();
        assert_eq!(repeated, expected, "count {count}");
    }
}

#[test]
fn repeat_composes_with_other_adapters() {
    let total: i32 = (1..=3).repeat_seq(4).sum();
    assert_eq!(total, 24);

    let evens: Vec<i32> = [1, 2].into_iter().repeat_seq(3).filter(|n| n % 2 == 0).collect();
    assert_eq!(evens, vec![2, 2, 2]);
}

#[test]
fn repeat_output_feeds_element_at() {
    // The repeated sequence is itself a valid single-pass source.
    let got = repeat([10, 20, 30], 2).element_at(4, IndexingPolicy::Default);
    assert_eq!(got, Ok(20));
}
