//! Export-condition normalization.
//!
//! Rewrites each object-valued entry of a manifest's `exports` mapping so
//! that the conventional condition keys (`types`, `import`, `require`) come
//! first, in a fixed priority order. Every other key keeps its original
//! relative position. No key is added or removed and no value is inspected
//! or changed — only serialization order differs.

use serde_json::{Map, Value};

use crate::manifest::Manifest;

/// Default priority order for export conditions. `types` must come first so
/// TypeScript resolves declarations before the runtime entry points.
pub const DEFAULT_ORDER: [&str; 3] = ["types", "import", "require"];

/// Reorder a single export entry.
///
/// Keys named in `order` are emitted first, in `order`'s sequence, when
/// present; the remaining keys follow in their original relative order.
/// Idempotent: a second pass re-derives the same canonical order.
#[must_use]
pub fn normalize_entry(entry: &Map<String, Value>, order: &[String]) -> Map<String, Value> {
    let mut normalized = Map::new();
    for key in order {
        if let Some(value) = entry.get(key) {
            normalized.insert(key.clone(), value.clone());
        }
    }
    for (key, value) in entry {
        if !order.iter().any(|priority| priority == key) {
            normalized.insert(key.clone(), value.clone());
        }
    }
    normalized
}

/// Normalize every object-valued entry under the top-level `exports`
/// mapping. Entries that are not objects (plain string targets) pass
/// through untouched, as does a manifest with no `exports` section.
///
/// Returns the number of entries rewritten.
pub fn normalize_exports(manifest: &mut Manifest, order: &[String]) -> usize {
    let Some(exports) = manifest.section_mut("exports") else {
        return 0;
    };
    let mut rewritten = 0;
    for value in exports.values_mut() {
        if let Value::Object(entry) = value {
            *entry = normalize_entry(entry, order);
            rewritten += 1;
        }
    }
    rewritten
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
