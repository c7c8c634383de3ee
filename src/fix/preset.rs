use std::path::Path;

use anyhow::{Result, bail};

use pkgfix::config::PkgfixConfig;
use pkgfix::deps::{self, TableEdit};
use pkgfix::manifest::Manifest;

/// Add a named dependency preset to `devDependencies`, creating the table
/// if it is absent.
pub fn run(path: &Path, name: &str) -> Result<()> {
    let config = PkgfixConfig::load_for(path)?;
    let Some(additions) = config.preset(name) else {
        bail!("Unknown dependency preset '{name}'");
    };

    let mut manifest = Manifest::load(path)?;
    let added = additions.len();
    let edit = TableEdit::additions_only(additions);
    deps::edit_dev_dependencies(&mut manifest, &edit, true)?;
    manifest.save(path)?;

    tracing::debug!(preset = name, added, "applied dependency preset");
    println!("Updated {} with {name} test dependencies", path.display());
    Ok(())
}
