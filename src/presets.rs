//! Built-in dependency presets and the Jest → Vitest migration tables.
//!
//! Versions are fixed literals. Nothing here resolves ranges or talks to a
//! registry; the tables are written into `devDependencies` as-is.

/// Script commands installed by the Vitest migration.
pub const VITEST_SCRIPTS: [(&str, &str); 2] = [
    ("test", "vitest"),
    ("test:coverage", "vitest --coverage"),
];

/// Jest packages removed by the Vitest migration.
pub const JEST_PACKAGES: [&str; 3] = ["jest", "@types/jest", "react-test-renderer"];

/// Packages added by the Vitest migration (includes the React Native
/// testing stack the migrated packages use).
pub const VITEST_PACKAGES: [(&str, &str); 4] = [
    ("vitest", "^3.2.4"),
    ("@vitest/coverage-v8", "^3.2.4"),
    ("@testing-library/react-native", "^12.0.0"),
    ("@testing-library/jest-native", "^5.4.3"),
];

/// Built-in preset: unit-test dependencies for CLI packages.
pub const CLI_PRESET: [(&str, &str); 2] = [
    ("vitest", "^3.2.4"),
    ("@vitest/coverage-v8", "^3.2.4"),
];

/// Built-in preset: DOM-test dependencies for web packages.
pub const WEB_PRESET: [(&str, &str); 4] = [
    ("@testing-library/react", "^16.3.0"),
    ("@testing-library/jest-dom", "^6.8.0"),
    ("@testing-library/user-event", "^14.5.0"),
    ("jsdom", "^27.0.0"),
];

/// Look up a built-in preset by name.
#[must_use]
pub fn builtin(name: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match name {
        "cli" => Some(&CLI_PRESET),
        "web" => Some(&WEB_PRESET),
        _ => None,
    }
}
