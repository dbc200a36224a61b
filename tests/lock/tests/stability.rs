//! Stability lock tests.
//!
//! Sorts `(key, original_index)` pairs whose ordering comes from the key
//! only, then checks that equal keys keep ascending indices for every
//! algorithm whose catalog entry says it preserves ties.

use lock_tests::tagged::{is_stably_sorted, tag, Tagged};
use sortlab_harness::{generate_test_data, Distribution};
use sortlab_kernel::algorithms::{Algorithm, Stability};
use sortlab_kernel::carrier::instrument::Instrumentation;

fn sort_tagged(algorithm: Algorithm, keys: &[i64]) -> Vec<Tagged> {
    let mut instr = Instrumentation::new();
    algorithm.sort_fn::<Tagged>()(&tag(keys), &mut instr).expect("tagged input is accepted")
}

fn tie_heavy_inputs() -> Vec<Vec<i64>> {
    vec![
        vec![3, 1, 3, 2, 1, 3, 2, 1],
        vec![5, 5, 5, 5, 5, 5],
        vec![9, 0, 9, 0, 9, 0, 9, 0, 9],
        generate_test_data(120, Distribution::Duplicates, Some(17)).unwrap(),
        generate_test_data(90, Distribution::Duplicates, Some(18)).unwrap(),
    ]
}

#[test]
fn catalog_stable_set_is_exact() {
    let preserving: Vec<Algorithm> = Algorithm::CLASSIC
        .into_iter()
        .filter(|a| a.stability().preserves_ties())
        .collect();
    assert_eq!(
        preserving,
        vec![
            Algorithm::Bubble,
            Algorithm::Insertion,
            Algorithm::Merge,
            Algorithm::Counting,
            Algorithm::Radix,
            Algorithm::Bucket,
        ]
    );
    assert_eq!(Algorithm::Bucket.stability(), Stability::Conditional);
}

#[test]
fn tie_preserving_algorithms_are_stable() {
    for algorithm in Algorithm::ALL {
        if !algorithm.stability().preserves_ties() {
            continue;
        }
        for keys in tie_heavy_inputs() {
            let sorted = sort_tagged(algorithm, &keys);
            assert_eq!(sorted.len(), keys.len(), "{algorithm}");
            assert!(
                is_stably_sorted(&sorted),
                "{algorithm} reordered ties: {:?}",
                sorted.iter().map(|t| (t.key, t.index)).collect::<Vec<_>>()
            );
        }
    }
}

#[test]
fn unstable_algorithms_still_sort_keys() {
    for algorithm in Algorithm::ALL {
        if algorithm.stability().preserves_ties() {
            continue;
        }
        for keys in tie_heavy_inputs() {
            let sorted = sort_tagged(algorithm, &keys);
            assert!(
                sorted.windows(2).all(|w| w[0].key <= w[1].key),
                "{algorithm}"
            );
        }
    }
}

#[test]
fn selection_sort_can_reorder_ties() {
    // The swap of 1 into position 0 carries the first 2 past the second.
    let sorted = sort_tagged(Algorithm::Selection, &[2, 2, 1]);
    let indices: Vec<usize> = sorted.iter().map(|t| t.index).collect();
    assert_eq!(indices, vec![2, 1, 0]);
}
