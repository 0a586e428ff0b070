//! Render the benchmark report.
//!
//! The output contract is two lines on stdout: the prime count, then the
//! elapsed wall-clock time in seconds followed by the word `seconds`.
//! Seconds are formatted with six decimal digits (microsecond resolution).

use std::time::Duration;

/// Render the two-line report, newline-terminated.
pub fn render(count: u64, elapsed: Duration) -> String {
    format!("{}\n{:.6} seconds\n", count, elapsed.as_secs_f64())
}
