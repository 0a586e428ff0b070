//! Wall-clock timing for one benchmark run.
//!
//! A thin wrapper over `Instant`: time a closure, hand back its result and
//! the elapsed duration. No accumulation, no global state; what to do with
//! the measurement is the caller's business.

use std::time::{Duration, Instant};

/// Run `f` once and measure how long it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let res = f();
    (res, start.elapsed())
}
