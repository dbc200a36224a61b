//! Panic isolation around a single sort call.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use sortlab_kernel::algorithms::SortFn;
use sortlab_kernel::carrier::element::Element;
use sortlab_kernel::carrier::instrument::Instrumentation;
use sortlab_kernel::error::SortError;
use thiserror::Error;

/// Why a guarded sort call produced no output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum RunFailure {
    #[error(transparent)]
    Rejected(#[from] SortError),
    #[error("panicked: {0}")]
    Panicked(String),
}

/// Run `sort` and convert a panic into [`RunFailure::Panicked`].
///
/// The instrumentation may hold partial counts after a panic.
pub(crate) fn run_guarded<T: Element>(
    sort: SortFn<T>,
    input: &[T],
    instr: &mut Instrumentation<T>,
) -> Result<Vec<T>, RunFailure> {
    match panic::catch_unwind(AssertUnwindSafe(|| sort(input, instr))) {
        Ok(result) => Ok(result?),
        Err(payload) => Err(RunFailure::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
