//! Manifest file adapter.
//!
//! Loads a JSON package manifest into a key-ordered mapping and writes it
//! back with fixed formatting. All transformations operate on the in-memory
//! value; this module is the only place that touches the filesystem, so the
//! rest of the crate (and its tests) can run purely in memory.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// A parsed package manifest: the top-level JSON object with key order
/// preserved (serde_json is built with `preserve_order`, so iteration order
/// is document order).
#[derive(Clone, Debug, PartialEq)]
pub struct Manifest {
    root: Map<String, Value>,
}

impl Manifest {
    /// Wrap an already-parsed top-level object.
    #[must_use]
    pub const fn new(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Read and parse a manifest file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// its top-level value is not an object.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => bail!(
                "Manifest root must be a JSON object, got {}: {}",
                json_type_name(&other),
                path.display()
            ),
        }
    }

    /// Serialize with two-space indentation and overwrite the target file.
    ///
    /// Non-ASCII characters are written unescaped. No trailing newline is
    /// appended, matching the serializer's default output.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(&self.root).context("Failed to serialize manifest")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))
    }

    /// The top-level object.
    #[must_use]
    pub const fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Mutable access to an object-valued top-level section (`exports`,
    /// `scripts`, `devDependencies`, ...).
    ///
    /// Returns `None` when the section is absent or not an object; callers
    /// treat that as a no-op for the step concerned.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Map<String, Value>> {
        self.root.get_mut(name).and_then(Value::as_object_mut)
    }

    /// Like [`Self::section_mut`], but inserts an empty object when the
    /// section is absent.
    ///
    /// # Errors
    /// Returns an error if the section exists but is not an object.
    pub fn section_mut_or_default(&mut self, name: &str) -> Result<&mut Map<String, Value>> {
        let entry = self
            .root
            .entry(name.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
        match entry {
            Value::Object(map) => Ok(map),
            other => bail!(
                "Manifest field '{name}' must be an object, got {}",
                json_type_name(other)
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
