//! Ordered catalog of language codes and the modules to append for them.

use crate::error::{Error, Result};
use crate::schema::LearningModule;
use lp_fs::{ConfigFormat, ConfigStore};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// The A2 "useful phrases" modules, compiled into the binary.
const BUILTIN_A2: &str = include_str!("../catalog/a2.toml");

/// A language code and the module to append to its section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub code: String,
    #[serde(flatten)]
    pub module: LearningModule,
}

impl CatalogEntry {
    pub fn new(code: impl Into<String>, module: LearningModule) -> Self {
        Self {
            code: code.into(),
            module,
        }
    }
}

/// Entries in application order.
///
/// Serialized as an array of `module` tables:
///
/// ```toml
/// [[module]]
/// code = "hi"
/// level = "A2"
/// theme = "..."
/// description = "..."
/// units = [{ unitId = "hi-a2-u1", title = "...", emoji = "..." }]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(rename = "module", default)]
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from entries, rejecting an empty list and empty or
    /// duplicate codes.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in A2 catalog.
    pub fn builtin() -> Result<Self> {
        let catalog: Self = ConfigStore::parse_str(BUILTIN_A2, ConfigFormat::Toml)
            .map_err(Error::BuiltinCatalog)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a `.toml`, `.json` or `.yaml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog: Self = ConfigStore::new().load(path)?;
        catalog.validate()?;
        tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Check that there is at least one entry and that every code is
    /// non-empty, free of whitespace, and unique.
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(Error::invalid("catalog has no modules"));
        }
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.code.is_empty() {
                return Err(Error::invalid("empty language code"));
            }
            if entry.code.chars().any(|c| c.is_whitespace() || c == ':' || c == '[') {
                return Err(Error::invalid(format!(
                    "language code '{}' contains marker characters",
                    entry.code
                )));
            }
            if !seen.insert(entry.code.as_str()) {
                return Err(Error::invalid(format!(
                    "duplicate language code '{}'",
                    entry.code
                )));
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.code.as_str())
    }

    pub fn get(&self, code: &str) -> Option<&LearningModule> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| &e.module)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
