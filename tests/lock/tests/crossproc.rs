//! Cross-process determinism.
//!
//! Spawns `report_fixture` and `trace_fixture` under several environment
//! variants and asserts that every variant prints exactly the lines the
//! in-process fixture functions return. Wall time never appears in the
//! output, so any difference is a determinism bug.

use std::path::Path;
use std::process::Command;

use lock_tests::canonical_inputs::{report_lines, trace_lines};

/// Path of a sibling binary built from this package.
///
/// NOTE: Windows would need the `.exe` suffix; it is not a current target.
fn binary_path(name: &str) -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push(name);
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .to_string_lossy()
        .to_string()
}

fn run_variant(name: &str, work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path(name);
    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, value) in env_overrides {
        command.env(key, value);
    }

    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin} (work_dir={work_dir}): {e}"));
    assert!(
        output.status.success(),
        "{name} exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn expected_stdout(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

fn assert_variants_match(name: &str, expected: &str) {
    let root = workspace_root();
    let alt_cwd = std::env::temp_dir().to_string_lossy().to_string();

    let variants: [(&str, String, Vec<(&str, &str)>); 4] = [
        ("baseline", root.clone(), vec![]),
        ("cwd", alt_cwd, vec![]),
        ("locale", root.clone(), vec![("LC_ALL", "C"), ("LANG", "C")]),
        (
            "noise",
            root,
            vec![
                ("SORTLAB_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("RUST_LOG", "debug"),
            ],
        ),
    ];

    for (label, dir, overrides) in &variants {
        let stdout = run_variant(name, dir, overrides);
        assert_eq!(
            stdout, expected,
            "{name} output differs from in-process fixture under variant {label}"
        );
    }
}

#[test]
fn report_fixture_matches_in_process_across_env_variants() {
    let expected = expected_stdout(&report_lines());
    assert!(expected.contains("counts_digest=sha256:"));
    assert!(expected.contains("all_correct=true"));
    assert_variants_match("report_fixture", &expected);
}

#[test]
fn trace_fixture_matches_in_process_across_env_variants() {
    let expected = expected_stdout(&trace_lines());
    assert!(expected.contains("i64.Quick Sort.trace=sha256:"));
    assert!(expected.contains("f64.Bucket Sort.output=sha256:"));
    assert!(!expected.contains("f64.Radix Sort"));
    assert_variants_match("trace_fixture", &expected);
}
