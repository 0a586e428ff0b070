//! Error types for sieve construction.
//!
//! The sieve itself is total once its marker table exists; these errors all
//! describe ways the table can fail to come into existence.

use std::collections::TryReserveError;

use thiserror::Error;

/// Represent failures while setting up a sieve run.
#[derive(Debug, Error)]
pub enum SieveError {
    /// The marker table would need `bound + 1` entries, which does not fit
    /// in `usize` on this host.
    #[error("bound {bound} needs a marker table larger than this host can address")]
    BoundTooLarge { bound: u64 },

    /// The allocator refused the marker table. Propagated to the caller so
    /// the process can terminate with a non-zero status; there is no retry
    /// and no partial result.
    #[error("failed to allocate the marker table for bound {bound}")]
    TableAllocation {
        bound: u64,
        #[source]
        source: TryReserveError,
    },
}
