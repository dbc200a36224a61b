//! Prints the seeded benchmark fixture as `key=value` lines.
//!
//! Used by the cross-process test to show that generated inputs, operation
//! counts, and the counts digest do not depend on cwd, locale, or
//! unrelated environment variables.
//!
//! Usage: `report_fixture`
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`).

use lock_tests::canonical_inputs::report_lines;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    for line in report_lines() {
        println!("{line}");
    }
}
