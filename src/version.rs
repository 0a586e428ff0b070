//! eratos version information.
//!
//! This module exposes the tool version as a single constant so all
//! subsystems (CLI, report headers if any are ever added) agree on the same
//! value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The eratos version string (for example, `0.1.0`).
pub const ERATOS_VERSION: &str = env!("CARGO_PKG_VERSION");
