//! File-level run: read once, patch, write once.

use crate::Result;
use crate::patcher::{ContentPatcher, PatchOptions};
use crate::preview::unified_diff;
use crate::report::PatchReport;
use lp_content::Catalog;
use std::path::Path;

/// Whether a run writes its result back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the target with the patched buffer.
    #[default]
    Write,
    /// Leave the target untouched.
    DryRun,
}

/// Result of patching one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub report: PatchReport,
    pub before: String,
    pub after: String,
    pub written: bool,
}

impl FileReport {
    /// Unified diff of the change, labelled with `name`.
    pub fn diff(&self, name: &str) -> String {
        unified_diff(name, &self.before, &self.after)
    }
}

/// Patch the file at `path` with every entry of `catalog`.
///
/// The file is read once and, unless `mode` is [`WriteMode::DryRun`],
/// atomically overwritten once with the final buffer, even when some
/// entries were skipped. IO failures are the only errors.
pub fn patch_file(
    path: &Path,
    catalog: &Catalog,
    options: PatchOptions,
    mode: WriteMode,
) -> Result<FileReport> {
    let before = lp_fs::io::read_text(path)?;
    let mut after = before.clone();

    let report = ContentPatcher::with_options(catalog, options).patch_str(&mut after);

    let written = mode == WriteMode::Write;
    if written {
        lp_fs::io::write_text(path, &after)?;
    }

    tracing::info!(
        path = %path.display(),
        applied = report.applied_count(),
        skipped = report.len() - report.applied_count(),
        bytes = report.bytes_added(),
        written,
        "patch run finished"
    );

    Ok(FileReport {
        report,
        before,
        after,
        written,
    })
}
