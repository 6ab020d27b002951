//! Learning-path patcher.
//!
//! For each catalog entry, in order, against the live buffer:
//! locate `"{code}: ["`, find its closing bracket, splice the rendered
//! module in after the last element. A missing marker or unbalanced
//! section skips that entry with a warning; the rest still apply.
//!
//! Offsets are recomputed per entry, so each splice sees the ones before it.
//! Nothing guards against re-running: a second pass appends again.

pub mod error;
pub mod patcher;
pub mod preview;
pub mod report;
pub mod run;

pub use error::{Error, Result};
pub use lp_splice::ScanMode;
pub use patcher::{ContentPatcher, PatchOptions};
pub use preview::unified_diff;
pub use report::{Outcome, PatchReport};
pub use run::{FileReport, WriteMode, patch_file};

/// Default location of the curriculum data file, relative to the project root.
pub const DEFAULT_TARGET: &str = "i18n/learningPath.ts";
