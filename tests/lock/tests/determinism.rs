//! In-process determinism envelope.
//!
//! Proves that seeded generation, every algorithm's trace, and the seeded
//! benchmark's counts digest are identical across N=10 repetitions, and
//! that the fixture lines the binaries print are stable.

use lock_tests::canonical_inputs::{fixture_report, report_lines, trace_lines, SAMPLE};
use sortlab_harness::{generate_test_data, input_digest, Distribution};
use sortlab_kernel::algorithms::Algorithm;
use sortlab_kernel::carrier::instrument::Instrumentation;
use sortlab_kernel::proof::trace_hash::{step_chain, trace_digest};

const N: usize = 10;

#[test]
fn generated_inputs_are_deterministic_n10() {
    for distribution in Distribution::ALL {
        let baseline = input_digest(&generate_test_data(500, distribution, Some(2024)).unwrap());
        for _ in 0..N {
            let again = input_digest(&generate_test_data(500, distribution, Some(2024)).unwrap());
            assert_eq!(again, baseline, "{distribution}");
        }
    }
}

#[test]
fn different_seeds_change_random_inputs() {
    let a = generate_test_data(500, Distribution::Random, Some(1)).unwrap();
    let b = generate_test_data(500, Distribution::Random, Some(2)).unwrap();
    assert_ne!(input_digest(&a), input_digest(&b));
}

#[test]
fn traces_are_deterministic_n10() {
    let input = generate_test_data(150, Distribution::NearlySorted, Some(8)).unwrap();
    for algorithm in Algorithm::ALL {
        let digest = || {
            let mut instr = Instrumentation::new();
            algorithm.sort_fn::<i64>()(&input, &mut instr).unwrap();
            trace_digest(instr.trace())
        };
        let baseline = digest();
        for _ in 0..N {
            assert_eq!(digest(), baseline, "{algorithm}");
        }
    }
}

#[test]
fn quick_and_randomized_quick_traces_diverge() {
    let input = generate_test_data(60, Distribution::Random, Some(3)).unwrap();
    let run = |algorithm: Algorithm| {
        let mut instr = Instrumentation::new();
        let output = algorithm.sort_fn::<i64>()(&input, &mut instr).unwrap();
        (output, step_chain(instr.trace()).unwrap())
    };
    let (plain_out, plain) = run(Algorithm::Quick);
    let (randomized_out, randomized) = run(Algorithm::RandomizedQuick);
    assert_eq!(plain_out, randomized_out);
    assert_eq!(plain.first_divergence(&plain), None);
    assert!(plain.first_divergence(&randomized).is_some());

    // Same algorithm twice: identical chains.
    let (_, again) = run(Algorithm::RandomizedQuick);
    assert_eq!(randomized.first_divergence(&again), None);
}

#[test]
fn sample_trace_has_a_chain_per_snapshot() {
    let mut instr = Instrumentation::new();
    Algorithm::Heap.sort_fn::<i64>()(&SAMPLE, &mut instr).unwrap();
    let chain = step_chain(instr.trace()).unwrap();
    assert_eq!(chain.chain.len(), instr.trace().len());
    assert_eq!(chain.chain.len() as u64, instr.swaps());
}

#[test]
fn seeded_report_counts_digest_n10() {
    let baseline = fixture_report();
    assert!(baseline.all_correct());
    for _ in 0..N {
        assert_eq!(fixture_report().counts_digest(), baseline.counts_digest());
    }
}

#[test]
fn fixture_lines_are_stable_n10() {
    let report = report_lines();
    let trace = trace_lines();
    assert!(report.iter().any(|l| l.starts_with("counts_digest=sha256:")));
    assert!(report.contains(&"all_correct=true".to_string()));
    for _ in 0..N {
        assert_eq!(report_lines(), report);
        assert_eq!(trace_lines(), trace);
    }
}
