//! Repository configuration (`.pkgfix.toml`).
//!
//! Optional per-project overrides: the export-condition priority order and
//! named dependency presets. Loaded from the directory containing the
//! manifest being fixed. Missing file → all defaults (no error). Missing
//! fields use their defaults, so old config files keep working as fields
//! are added.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::exports::DEFAULT_ORDER;
use crate::presets;

/// Config file name, looked up next to the manifest.
pub const CONFIG_FILE: &str = ".pkgfix.toml";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Top-level pkgfix configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PkgfixConfig {
    /// Export-condition normalization settings.
    #[serde(default)]
    pub exports: ExportsConfig,

    /// Named dependency presets (`[presets.<name>]` tables of
    /// package → version). A preset with a built-in name (`cli`, `web`)
    /// replaces the built-in wholesale. Entries are applied in lexicographic
    /// package order.
    #[serde(default)]
    pub presets: BTreeMap<String, BTreeMap<String, String>>,
}

impl PkgfixConfig {
    /// Load the configuration that applies to a manifest: `.pkgfix.toml`
    /// in the manifest's directory, or defaults when the file is absent.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_for(manifest_path: &Path) -> Result<Self> {
        let dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Resolve a preset by name: config-defined first, then built-in.
    #[must_use]
    pub fn preset(&self, name: &str) -> Option<Vec<(String, String)>> {
        if let Some(table) = self.presets.get(name) {
            return Some(
                table
                    .iter()
                    .map(|(package, version)| (package.clone(), version.clone()))
                    .collect(),
            );
        }
        presets::builtin(name).map(|table| {
            table
                .iter()
                .map(|(package, version)| ((*package).to_owned(), (*version).to_owned()))
                .collect()
        })
    }
}

// ---------------------------------------------------------------------------
// ExportsConfig
// ---------------------------------------------------------------------------

/// Export-condition normalization settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportsConfig {
    /// Priority order for export conditions
    /// (default: `["types", "import", "require"]`).
    #[serde(default = "default_order")]
    pub order: Vec<String>,
}

impl Default for ExportsConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
        }
    }
}

fn default_order() -> Vec<String> {
    DEFAULT_ORDER.iter().map(ToString::to_string).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
