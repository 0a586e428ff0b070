//! CLI command implementations
//!
//! The command function returns `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use tracing::debug;

use crate::harness;
use crate::report;

use super::{CliError, CliResult, ExitCode};

/// Count the primes below `bound` under the timer and print the report.
///
/// A sieve failure (the marker table could not be allocated) becomes a
/// `CliError` with exit code 1; there is no retry and no partial result.
pub fn count(bound: u64) -> CliResult<ExitCode> {
    debug!(bound, "starting sieve");

    let (counted, elapsed) = harness::timed(|| eratos_core::count_primes_below(bound));
    let count = counted.map_err(|e| CliError::failure(format!("eratos: {}", e)))?;

    debug!(count, ?elapsed, "sieve finished");

    print!("{}", report::render(count, elapsed));
    Ok(ExitCode::SUCCESS)
}
