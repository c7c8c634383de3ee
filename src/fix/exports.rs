use std::path::Path;

use anyhow::Result;

use pkgfix::config::PkgfixConfig;
use pkgfix::exports::normalize_exports;
use pkgfix::manifest::Manifest;

/// Reorder export conditions in the manifest's `exports` field.
pub fn run(path: &Path) -> Result<()> {
    let config = PkgfixConfig::load_for(path)?;
    let mut manifest = Manifest::load(path)?;

    let rewritten = normalize_exports(&mut manifest, &config.exports.order);
    manifest.save(path)?;

    tracing::debug!(rewritten, "normalized export entries");
    println!("Fixed exports configuration in {}", path.display());
    Ok(())
}
