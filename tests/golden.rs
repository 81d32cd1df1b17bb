//! Golden tests for dump-todo
//!
//! These tests pin the exact output for the checked-in sample project:
//! - Line format stability across versions
//! - `.gitignore` filtering of files and directories
//! - Stable walk order

use assert_cmd::Command;
use std::path::PathBuf;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the sample project
fn sample_project() -> PathBuf {
    fixtures_dir().join("sample_project")
}

/// Create a command for running the dump-todo binary
fn dump_todo_cmd() -> Command {
    Command::cargo_bin("dump-todo").expect("Failed to find dump-todo binary")
}

const GOLDEN: &str = "\
README.md:3: TODO: write usage docs
notes/plan.txt:2: TODO: a TODO: b
src/main.rs:4: TODO: read the port from the environment
src/main.rs:9: TODO: replace magic number
";

#[test]
fn golden_sample_project() {
    let output = dump_todo_cmd()
        .current_dir(sample_project())
        .output()
        .expect("failed to execute");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), GOLDEN);
    assert!(output.stderr.is_empty());
}

#[test]
fn golden_output_is_stable_across_runs() {
    let first = dump_todo_cmd()
        .current_dir(sample_project())
        .output()
        .expect("failed to execute");
    let second = dump_todo_cmd()
        .current_dir(sample_project())
        .output()
        .expect("failed to execute");

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn golden_never_reports_ignored_paths() {
    let output = dump_todo_cmd()
        .current_dir(sample_project())
        .output()
        .expect("failed to execute");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!stdout.contains("build/gen.py"));
    assert!(!stdout.contains("run.log"));
    assert!(!stdout.contains("lowercase"));
}
