//! Algorithm-level properties over generated and hand-picked inputs.
//!
//! Proves, for every algorithm in the catalog:
//! 1. Output is a non-decreasing permutation of the input
//! 2. Sorting is idempotent
//! 3. Empty and single-element inputs leave counters at zero
//! 4. The caller's input is never mutated
//! 5. Counts agree with each algorithm's declared mechanics

use sortlab_harness::{generate_test_data, Distribution};
use sortlab_kernel::algorithms::descriptor::registry_of;
use sortlab_kernel::algorithms::{Algorithm, SortFn};
use sortlab_kernel::carrier::element::{is_non_decreasing, reference_sorted, Element};
use sortlab_kernel::carrier::instrument::Instrumentation;

const SIZES: [usize; 5] = [1, 2, 17, 64, 200];

fn run<T: Element>(sort: SortFn<T>, input: &[T]) -> (Vec<T>, Instrumentation<T>) {
    let mut instr = Instrumentation::new();
    let output = sort(input, &mut instr).expect("input is accepted");
    (output, instr)
}

fn generated_inputs() -> Vec<(String, Vec<i64>)> {
    let mut inputs = Vec::new();
    for size in SIZES {
        for distribution in Distribution::ALL {
            let data = generate_test_data(size, distribution, Some(size as u64 * 31)).unwrap();
            inputs.push((format!("{distribution}/{size}"), data));
        }
    }
    inputs
}

// ---------------------------------------------------------------------------
// 1-2. Permutation, order, idempotence
// ---------------------------------------------------------------------------

#[test]
fn every_algorithm_sorts_every_generated_input() {
    for algorithm in Algorithm::ALL {
        let sort = algorithm.sort_fn::<i64>();
        for (label, input) in generated_inputs() {
            let (output, _) = run(sort, &input);
            assert!(is_non_decreasing(&output), "{algorithm} {label}");
            assert_eq!(output, reference_sorted(&input), "{algorithm} {label}");
        }
    }
}

#[test]
fn sorting_is_idempotent() {
    for algorithm in Algorithm::ALL {
        let sort = algorithm.sort_fn::<i64>();
        for (label, input) in generated_inputs() {
            let (once, _) = run(sort, &input);
            let (twice, _) = run(sort, &once);
            assert_eq!(once, twice, "{algorithm} {label}");
        }
    }
}

#[test]
fn comparison_sorts_handle_negative_floats() {
    let input = [2.5_f64, -1.0, 0.0, -1.0, 9.75, -30.5, 2.5, 1e-3];
    for algorithm in Algorithm::ALL {
        if algorithm.requires_integers() {
            continue;
        }
        let (output, _) = run(algorithm.sort_fn::<f64>(), &input);
        assert_eq!(output, reference_sorted(&input), "{algorithm}");
    }
}

#[test]
fn every_algorithm_accepts_unsigned_and_narrow_types() {
    let wide: Vec<u64> = vec![u64::MAX, 0, 7, u64::MAX - 1, 7];
    let narrow: Vec<i32> = vec![i32::MAX, -4, 0, i32::MIN + 1, -4];
    for algorithm in Algorithm::ALL {
        if algorithm != Algorithm::Counting {
            let (output, _) = run(algorithm.sort_fn::<u64>(), &wide);
            assert_eq!(output, reference_sorted(&wide), "{algorithm} u64");
        }
        if algorithm != Algorithm::Radix && algorithm != Algorithm::Counting {
            let (output, _) = run(algorithm.sort_fn::<i32>(), &narrow);
            assert_eq!(output, reference_sorted(&narrow), "{algorithm} i32");
        }
    }
}

#[test]
fn textbook_sample_sorts_for_every_algorithm() {
    let input = [64_i64, 34, 25, 12, 22, 11, 90];
    for (name, sort) in registry_of::<i64>(&Algorithm::ALL) {
        let (output, _) = run(sort, &input);
        assert_eq!(output, vec![11, 12, 22, 25, 34, 64, 90], "{name}");
    }
}

// ---------------------------------------------------------------------------
// 3-4. Trivial inputs, input immutability
// ---------------------------------------------------------------------------

#[test]
fn trivial_inputs_record_nothing() {
    for algorithm in Algorithm::ALL {
        for input in [Vec::<i64>::new(), vec![42]] {
            let (output, instr) = run(algorithm.sort_fn::<i64>(), &input);
            assert_eq!(output, input, "{algorithm}");
            assert_eq!(instr.comparisons(), 0, "{algorithm}");
            assert_eq!(instr.swaps(), 0, "{algorithm}");
            assert!(instr.trace().is_empty(), "{algorithm}");
        }
    }
}

#[test]
fn caller_input_is_untouched() {
    let input = generate_test_data(50, Distribution::Reverse, None).unwrap();
    let before = input.clone();
    for algorithm in Algorithm::ALL {
        let _ = run(algorithm.sort_fn::<i64>(), &input);
        assert_eq!(input, before, "{algorithm}");
    }
}

// ---------------------------------------------------------------------------
// 5. Counts versus declared mechanics
// ---------------------------------------------------------------------------

#[test]
fn key_based_sorts_never_compare_or_swap() {
    let input = generate_test_data(100, Distribution::Random, Some(5)).unwrap();
    for algorithm in Algorithm::ALL {
        let (_, instr) = run(algorithm.sort_fn::<i64>(), &input);
        if algorithm.is_comparison_based() {
            assert!(instr.comparisons() > 0, "{algorithm}");
        } else {
            assert_eq!(instr.comparisons(), 0, "{algorithm}");
            assert_eq!(instr.swaps(), 0, "{algorithm}");
            assert!(!instr.trace().is_empty(), "{algorithm}");
        }
    }
}

#[test]
fn swap_based_traces_grow_once_per_swap() {
    let input = generate_test_data(80, Distribution::Random, Some(9)).unwrap();
    for algorithm in [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::RandomizedQuick,
    ] {
        let (_, instr) = run(algorithm.sort_fn::<i64>(), &input);
        assert_eq!(instr.trace().len() as u64, instr.swaps(), "{algorithm}");
    }
}

#[test]
fn step_based_sorts_count_no_swaps() {
    let input = generate_test_data(80, Distribution::Random, Some(9)).unwrap();
    for algorithm in [
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Bucket,
    ] {
        let (_, instr) = run(algorithm.sort_fn::<i64>(), &input);
        assert_eq!(instr.swaps(), 0, "{algorithm}");
        assert!(!instr.trace().is_empty(), "{algorithm}");
    }
}

#[test]
fn counting_sort_records_one_step_per_element() {
    let input = generate_test_data(60, Distribution::Duplicates, Some(2)).unwrap();
    let (_, instr) = run(Algorithm::Counting.sort_fn::<i64>(), &input);
    assert_eq!(instr.trace().len(), 60);
}

#[test]
fn selection_sort_never_swaps_equal_elements() {
    let (output, instr) = run(Algorithm::Selection.sort_fn::<i64>(), &[5, 5, 5, 5]);
    assert_eq!(output, vec![5, 5, 5, 5]);
    assert_eq!(instr.swaps(), 0);
    assert_eq!(instr.comparisons(), 6);
}

#[test]
fn sorted_input_is_cheap_for_adaptive_sorts() {
    let input = generate_test_data(200, Distribution::Sorted, None).unwrap();
    let (_, bubble) = run(Algorithm::Bubble.sort_fn::<i64>(), &input);
    assert_eq!(bubble.comparisons(), 199);
    assert_eq!(bubble.swaps(), 0);

    let (_, insertion) = run(Algorithm::Insertion.sort_fn::<i64>(), &input);
    assert_eq!(insertion.comparisons(), 199);
}

#[test]
fn reverse_input_maximizes_bubble_swaps() {
    let input = generate_test_data(30, Distribution::Reverse, None).unwrap();
    let (_, instr) = run(Algorithm::Bubble.sort_fn::<i64>(), &input);
    assert_eq!(instr.swaps(), 30 * 29 / 2);
}
