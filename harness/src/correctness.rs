//! Correctness checking against a trusted reference ordering.

use std::collections::BTreeMap;

use sortlab_kernel::algorithms::SortFn;
use sortlab_kernel::carrier::element::{reference_sorted, Element};
use sortlab_kernel::carrier::instrument::Instrumentation;
use tracing::{debug, warn};

use crate::guard::run_guarded;

/// One input and its expected sorted output.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase<T> {
    pub input: Vec<T>,
    pub expected: Vec<T>,
}

impl<T: Element> TestCase<T> {
    /// Expected output computed with the standard library sort.
    #[must_use]
    pub fn new(input: Vec<T>) -> Self {
        let expected = reference_sorted(&input);
        Self { input, expected }
    }

    /// Caller-provided expected output. Not checked against the input.
    #[must_use]
    pub fn with_expected(input: Vec<T>, expected: Vec<T>) -> Self {
        Self { input, expected }
    }
}

/// Fixed edge-case inputs: empty, single, sorted, reverse, mixed, all-equal.
#[must_use]
pub fn standard_cases() -> Vec<TestCase<i64>> {
    [
        vec![],
        vec![1],
        vec![1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1],
        vec![3, 1, 4, 1, 5, 9, 2, 6],
        vec![1, 1, 1, 1, 1],
    ]
    .into_iter()
    .map(TestCase::new)
    .collect()
}

/// Run every algorithm over every case.
///
/// An algorithm passes only if it matches `expected` on all cases. Its first
/// mismatch, error, or panic marks it failed and skips its remaining cases;
/// the other algorithms still run.
pub fn test_correctness<T: Element>(
    algorithms: &BTreeMap<String, SortFn<T>>,
    cases: &[TestCase<T>],
) -> BTreeMap<String, bool> {
    algorithms
        .iter()
        .map(|(name, &sort)| (name.clone(), passes_all(name, sort, cases)))
        .collect()
}

fn passes_all<T: Element>(name: &str, sort: SortFn<T>, cases: &[TestCase<T>]) -> bool {
    let mut instr = Instrumentation::new();
    for (index, case) in cases.iter().enumerate() {
        instr.reset();
        match run_guarded(sort, &case.input, &mut instr) {
            Ok(output) if output == case.expected => {}
            Ok(output) => {
                warn!(
                    algorithm = name,
                    case = index,
                    input = ?case.input,
                    expected = ?case.expected,
                    actual = ?output,
                    "incorrect output"
                );
                return false;
            }
            Err(failure) => {
                warn!(algorithm = name, case = index, %failure, "sort failed");
                return false;
            }
        }
    }
    debug!(algorithm = name, cases = cases.len(), "all cases passed");
    true
}
