//! The locate, match, splice loop.

use crate::report::{Outcome, PatchReport};
use lp_content::{Catalog, CatalogEntry, render_module};
use lp_splice::{ScanMode, Splice, append_element, locate_section};

/// Knobs for a patch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchOptions {
    pub scan_mode: ScanMode,
}

/// Appends each catalog module to its language's section.
#[derive(Debug, Clone)]
pub struct ContentPatcher<'a> {
    catalog: &'a Catalog,
    options: PatchOptions,
}

impl<'a> ContentPatcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_options(catalog, PatchOptions::default())
    }

    pub fn with_options(catalog: &'a Catalog, options: PatchOptions) -> Self {
        Self { catalog, options }
    }

    pub fn options(&self) -> PatchOptions {
        self.options
    }

    /// Patch `buffer` in place, one entry at a time in catalog order.
    ///
    /// Each entry is located in the buffer as left by the previous entries.
    /// Failures skip that entry only.
    pub fn patch_str(&self, buffer: &mut String) -> PatchReport {
        let mut report = PatchReport::new();

        for entry in self.catalog {
            let outcome = match self.patch_entry(buffer, entry) {
                Ok(splice) => {
                    tracing::debug!(
                        code = %entry.code,
                        offset = splice.offset,
                        bytes = splice.len,
                        "inserted module"
                    );
                    Outcome::Applied {
                        code: entry.code.clone(),
                        offset: splice.offset,
                        bytes: splice.len,
                    }
                }
                Err(error) => {
                    tracing::warn!(code = %entry.code, %error, "skipping language");
                    Outcome::Skipped {
                        code: entry.code.clone(),
                        error,
                    }
                }
            };
            report.push(outcome);
        }

        report
    }

    /// Splice a single entry's module into `buffer`.
    pub fn patch_entry(&self, buffer: &mut String, entry: &CatalogEntry) -> lp_splice::Result<Splice> {
        let section = locate_section(buffer, &entry.code, self.options.scan_mode)?;
        append_element(buffer, &section, &render_module(&entry.module))
    }
}
