//! Script command updates.
//!
//! Inserts or overwrites entries in a manifest's `scripts` table. There is
//! no removal behavior. A manifest without a `scripts` section is left
//! untouched.

use serde_json::Value;

use crate::manifest::Manifest;

/// Top-level section holding task commands.
pub const SCRIPTS: &str = "scripts";

/// Overwrite or insert each (task name, command) pair in the `scripts`
/// table. Returns the number of entries written, or 0 when the section is
/// absent or not an object.
pub fn apply(manifest: &mut Manifest, updates: &[(&str, &str)]) -> usize {
    let Some(scripts) = manifest.section_mut(SCRIPTS) else {
        return 0;
    };
    for (name, command) in updates {
        scripts.insert((*name).to_owned(), Value::String((*command).to_owned()));
    }
    updates.len()
}
