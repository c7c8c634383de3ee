use std::path::Path;

use anyhow::Result;

use pkgfix::deps::{self, TableEdit};
use pkgfix::manifest::Manifest;
use pkgfix::presets::{JEST_PACKAGES, VITEST_PACKAGES, VITEST_SCRIPTS};
use pkgfix::scripts;

/// Migrate the manifest's test setup from Jest to Vitest.
///
/// Absent `scripts` or `devDependencies` sections are skipped; the command
/// still succeeds and rewrites the file.
pub fn run(path: &Path) -> Result<()> {
    let mut manifest = Manifest::load(path)?;

    let scripts_written = scripts::apply(&mut manifest, &VITEST_SCRIPTS);

    let edit = TableEdit::new(&JEST_PACKAGES, &VITEST_PACKAGES);
    let deps_edited = deps::edit_dev_dependencies(&mut manifest, &edit, false)?;

    manifest.save(path)?;

    tracing::debug!(scripts_written, deps_edited, "migrated test setup to vitest");
    println!("Updated {} for Vitest", path.display());
    Ok(())
}
