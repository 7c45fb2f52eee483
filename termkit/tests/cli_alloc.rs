//! CLI tests for `termkit alloc`.
//!
//! The out-of-memory path terminates the process, so it can only be observed
//! from outside: exit code and the diagnostic on stderr.

mod support;

use termkit::exit_codes;

use support::{stderr, stdout, termkit};

#[test]
fn alloc_resize_and_free_succeeds() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = termkit(temp.path(), &["alloc", "--size", "64", "--resize", "128"], "");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let out = stdout(&output);
    assert!(out.contains("allocated 64 bytes"), "stdout: {out}");
    assert!(out.contains("reallocated to 128 bytes, 64 bytes preserved"), "stdout: {out}");
    assert!(out.contains("freed"), "stdout: {out}");
}

#[test]
fn alloc_shrink_preserves_leading_bytes() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = termkit(temp.path(), &["alloc", "--size", "32", "--resize", "8"], "");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).contains("reallocated to 8 bytes, 8 bytes preserved"));
}

#[test]
fn impossible_allocation_is_fatal_with_diagnostic() {
    let temp = tempfile::tempdir().expect("tempdir");
    let size = usize::MAX.to_string();
    let output = termkit(temp.path(), &["alloc", "--size", &size], "");

    assert_eq!(output.status.code(), Some(exit_codes::FATAL));
    let err = stderr(&output);
    assert!(
        err.contains("Fatal error: Memory allocation failed."),
        "stderr: {err}"
    );
    assert!(!stdout(&output).contains("allocated"));
}
