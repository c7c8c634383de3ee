use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod fix;
mod telemetry;

/// One-shot fixers for JSON package manifests
///
/// Each subcommand reads one package.json-style manifest, applies a single
/// fixed transformation in memory, and overwrites the file with two-space
/// indented JSON. Key order is preserved everywhere except where a command
/// deliberately reorders it.
///
/// COMMANDS:
///
///   pkgfix exports <manifest>    reorder export conditions
///   pkgfix vitest <manifest>     migrate test setup from Jest to Vitest
///   pkgfix cli-deps <manifest>   add the "cli" test-dependency preset
///   pkgfix web-deps <manifest>   add the "web" test-dependency preset
///
/// A `.pkgfix.toml` next to the manifest can override the export-condition
/// order and define or replace dependency presets. Diagnostics go to stderr
/// (RUST_LOG=debug for detail); the success confirmation goes to stdout.
#[derive(Parser)]
#[command(name = "pkgfix")]
#[command(version, about)]
#[command(propagate_version = true)]
#[command(after_help = "See 'pkgfix <command> --help' for more information on a specific command.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reorder export conditions in the manifest's `exports` field
    ///
    /// Within every object-valued export entry, `types`, `import`, and
    /// `require` are moved to the front (in that order) when present; all
    /// other keys keep their original relative order. Values never change.
    Exports {
        /// Path to the manifest file
        manifest: PathBuf,
    },

    /// Migrate the manifest's test setup from Jest to Vitest
    ///
    /// Rewrites `scripts.test` and `scripts.test:coverage`, removes Jest
    /// packages from `devDependencies`, and adds the Vitest package set.
    /// Sections that are absent are skipped without error.
    Vitest {
        /// Path to the manifest file
        manifest: PathBuf,
    },

    /// Add the "cli" test-dependency preset to `devDependencies`
    ///
    /// Creates the `devDependencies` table if it is absent. Existing
    /// entries are overwritten with the preset's pinned versions.
    #[command(name = "cli-deps")]
    CliDeps {
        /// Path to the manifest file
        manifest: PathBuf,
    },

    /// Add the "web" test-dependency preset to `devDependencies`
    ///
    /// Creates the `devDependencies` table if it is absent. Existing
    /// entries are overwritten with the preset's pinned versions.
    #[command(name = "web-deps")]
    WebDeps {
        /// Path to the manifest file
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Exports { manifest } => fix::exports::run(&manifest),
        Commands::Vitest { manifest } => fix::vitest::run(&manifest),
        Commands::CliDeps { manifest } => fix::preset::run(&manifest, "cli"),
        Commands::WebDeps { manifest } => fix::preset::run(&manifest, "web"),
    }
}
