mod common;
use common::*;

use tempfile::TempDir;

/// Every subcommand reports a uniform usage error when the manifest
/// argument is missing.
#[test]
fn missing_argument_is_a_usage_error_for_every_command() {
    let dir = TempDir::new().expect("temp dir");
    for command in ["exports", "vitest", "cli-deps", "web-deps"] {
        let out = pkgfix_in(dir.path(), &[command]);
        assert!(
            !out.status.success(),
            "pkgfix {command} without a path must fail"
        );
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(
            stderr.contains("Usage"),
            "expected a usage message for {command}, got: {stderr}"
        );
    }
}

/// A missing manifest file fails with a diagnostic naming the path.
#[test]
fn missing_file_fails_with_context() {
    let dir = TempDir::new().expect("temp dir");
    let out = pkgfix_in(dir.path(), &["exports", "absent.json"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Failed to read manifest") && stderr.contains("absent.json"),
        "unexpected diagnostic: {stderr}"
    );
}

/// Malformed JSON fails with a parse diagnostic; the file is not rewritten.
#[test]
fn malformed_json_fails_and_leaves_file_alone() {
    let (dir, path) = setup_manifest("{broken");
    let out = pkgfix_in(dir.path(), &["vitest", "package.json"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Failed to parse manifest"),
        "unexpected diagnostic: {stderr}"
    );
    let content = std::fs::read_to_string(&path).expect("read fixture back");
    assert_eq!(content, "{broken", "a failed parse must not touch the file");
}

/// A non-object top-level value is rejected.
#[test]
fn non_object_root_fails() {
    let (dir, _path) = setup_manifest("[1, 2, 3]");
    let out = pkgfix_in(dir.path(), &["exports", "package.json"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("must be a JSON object"),
        "unexpected diagnostic: {stderr}"
    );
}

/// A broken `.pkgfix.toml` fails the run before the manifest is touched.
#[test]
fn broken_config_fails_before_writing() {
    let (dir, path) = setup_manifest(r#"{"exports": {".": {"require": "./a.js"}}}"#);
    std::fs::write(dir.path().join(".pkgfix.toml"), "not = [valid").expect("write config");

    let out = pkgfix_in(dir.path(), &["exports", "package.json"]);
    assert!(!out.status.success());

    let content = std::fs::read_to_string(&path).expect("read fixture back");
    assert_eq!(
        content, r#"{"exports": {".": {"require": "./a.js"}}}"#,
        "a failed config load must not touch the manifest"
    );
}
