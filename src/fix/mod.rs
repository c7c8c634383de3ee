//! Subcommand implementations.
//!
//! Each command is one linear pass over a single manifest: load, transform
//! in memory, write the file back, print a one-line confirmation to stdout.
//! The file is overwritten unconditionally, even when the transformation
//! turned out to be a no-op for that manifest.

pub mod exports;
pub mod preset;
pub mod vitest;
