//! pkgfix library crate — re-exports for integration tests.
//!
//! The primary interface is the `pkgfix` binary. This lib.rs exposes the
//! transformation modules so that integration tests can exercise the
//! export normalizer, the dependency-table editor, and the manifest
//! adapter directly without going through the CLI.

pub mod config;
pub mod deps;
pub mod exports;
pub mod manifest;
pub mod presets;
pub mod scripts;

// Private modules only used by the binary — not re-exported.
// fix, telemetry
