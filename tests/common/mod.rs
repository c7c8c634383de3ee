//! Shared test helpers for pkgfix integration tests.
//!
//! All tests use temp directories — no side effects outside them. Each test
//! gets its own manifest file via `setup_manifest()` and runs the real
//! binary through `pkgfix_in` / `pkgfix_ok`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Create a temp dir containing a `package.json` with the given content.
///
/// Returns the temp dir (keep it alive for the test's duration) and the
/// manifest path.
pub fn setup_manifest(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("package.json");
    std::fs::write(&path, content).expect("failed to write manifest fixture");
    (dir, path)
}

/// Run pkgfix with the given args in the given directory.
pub fn pkgfix_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pkgfix"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to execute pkgfix")
}

/// Run pkgfix and assert it succeeds. Returns stdout as a string.
pub fn pkgfix_ok(dir: &Path, args: &[&str]) -> String {
    let out = pkgfix_in(dir, args);
    assert!(
        out.status.success(),
        "pkgfix {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

/// Parse the manifest back from disk.
pub fn read_manifest(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).expect("failed to read manifest back");
    serde_json::from_str(&content).expect("manifest on disk must be valid JSON")
}

/// Top-level or nested object keys, in document order.
pub fn object_keys(value: &serde_json::Value) -> Vec<String> {
    value
        .as_object()
        .expect("value must be a JSON object")
        .keys()
        .cloned()
        .collect()
}
