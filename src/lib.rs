#![forbid(unsafe_code)]
//! eratos: Sieve of Eratosthenes prime-counting benchmark
//!
//! Counts the primes below a bound, times the computation, and reports the
//! count and the elapsed wall-clock seconds. The algorithm lives in the pure
//! `eratos_core` crate; this crate provides the CLI, the timing harness, and
//! the report rendering.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` with `?` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod harness;
pub mod report;
pub mod version;

pub use eratos_core::errors::SieveError;
pub use eratos_core::sieve::count_primes_below;
