//! Dependency table edits.
//!
//! Batched removals and additions against a package-name → version-range
//! mapping. Removing an absent key is not an error; additions overwrite
//! unconditionally with a fixed literal version. New keys are appended at
//! the end of the mapping; overwritten keys keep their position. No version
//! ranges are merged and no conflicts are detected.

use anyhow::Result;
use serde_json::{Map, Value};

use crate::manifest::Manifest;

/// Top-level section holding development dependencies.
pub const DEV_DEPENDENCIES: &str = "devDependencies";

// ---------------------------------------------------------------------------
// TableEdit
// ---------------------------------------------------------------------------

/// A batch of edits against one dependency table. Removals are applied
/// before additions, so an edit can replace one package set with another.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableEdit {
    /// Package names to delete (exact match; absence is ignored).
    pub removals: Vec<String>,
    /// (package name, version range) pairs to insert or overwrite.
    pub additions: Vec<(String, String)>,
}

impl TableEdit {
    /// An edit with removals and additions.
    #[must_use]
    pub fn new(removals: &[&str], additions: &[(&str, &str)]) -> Self {
        Self {
            removals: removals.iter().map(ToString::to_string).collect(),
            additions: additions
                .iter()
                .map(|(name, version)| ((*name).to_owned(), (*version).to_owned()))
                .collect(),
        }
    }

    /// An additions-only edit.
    #[must_use]
    pub fn additions_only(additions: Vec<(String, String)>) -> Self {
        Self {
            removals: Vec::new(),
            additions,
        }
    }
}

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

/// Apply an edit to a dependency table in place.
///
/// `shift_remove` keeps the surviving keys in their original relative
/// order; a plain `remove` would swap the last entry into the hole.
pub fn apply(table: &mut Map<String, Value>, edit: &TableEdit) {
    for name in &edit.removals {
        table.shift_remove(name);
    }
    for (name, version) in &edit.additions {
        table.insert(name.clone(), Value::String(version.clone()));
    }
}

/// Apply an edit to the manifest's `devDependencies` section.
///
/// With `create_missing`, an absent section is created as an empty table
/// first (the preset commands do this); without it, an absent section makes
/// the whole edit a no-op (the Vitest migration skips the dependency step
/// when there is nothing to migrate). Returns whether a table was edited.
///
/// # Errors
/// Returns an error if `devDependencies` exists but is not an object and
/// `create_missing` is set.
pub fn edit_dev_dependencies(
    manifest: &mut Manifest,
    edit: &TableEdit,
    create_missing: bool,
) -> Result<bool> {
    let table = if create_missing {
        Some(manifest.section_mut_or_default(DEV_DEPENDENCIES)?)
    } else {
        manifest.section_mut(DEV_DEPENDENCIES)
    };
    match table {
        Some(table) => {
            apply(table, edit);
            Ok(true)
        }
        None => Ok(false),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
