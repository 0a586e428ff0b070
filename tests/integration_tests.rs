//! End-to-end tests for the eratos binary
//!
//! These run the compiled binary and check the output contract: exactly two
//! lines on stdout, the prime count first, then the elapsed seconds followed
//! by the word `seconds`.

use std::process::{Command, Output};

fn run_eratos(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_eratos"))
        .args(args)
        .output()
        .expect("failed to spawn eratos")
}

/// Split stdout into its lines, asserting the two-line contract.
fn report_lines(output: &Output) -> (String, String) {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout not utf-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "expected two report lines, got: {:?}", lines);
    (lines[0].to_string(), lines[1].to_string())
}

#[test]
fn counts_primes_below_one_hundred() {
    let output = run_eratos(&["100"]);
    assert!(output.status.success());

    let (count_line, elapsed_line) = report_lines(&output);
    assert_eq!(count_line, "25");

    let secs = elapsed_line
        .strip_suffix(" seconds")
        .expect("elapsed line missing ' seconds' suffix");
    let secs: f64 = secs.parse().expect("elapsed is not a float");
    assert!(secs >= 0.0);
}

#[test]
fn zero_bound_reports_a_zero_count() {
    let output = run_eratos(&["0"]);
    assert!(output.status.success());

    let (count_line, _elapsed_line) = report_lines(&output);
    assert_eq!(count_line, "0");
}

#[test]
fn default_invocation_counts_below_ten_million() {
    let output = run_eratos(&[]);
    assert!(output.status.success());

    let (count_line, elapsed_line) = report_lines(&output);
    assert_eq!(count_line, "620720");
    assert!(elapsed_line.ends_with(" seconds"));
}

#[test]
fn rejects_a_non_numeric_bound() {
    let output = run_eratos(&["ten"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
