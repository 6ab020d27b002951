//! Section location: marker plus matching close bracket.

use crate::error::{Error, Result};
use crate::marker::{count_markers, find_marker, section_marker};
use crate::scan::{Scan, ScanMode, scan_to_close};

/// A located section, as byte offsets into the buffer it was found in.
///
/// Offsets go stale as soon as that buffer is modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Start of the marker text.
    pub marker_start: usize,
    /// First byte after the marker's opening bracket.
    pub body_start: usize,
    /// The matching closing bracket.
    pub close: usize,
}

impl Section {
    /// The text between the brackets, exclusive.
    pub fn body<'a>(&self, content: &'a str) -> &'a str {
        &content[self.body_start..self.close]
    }
}

/// Find the section for `code`: the first `"{code}: ["` and its closing `]`.
pub fn locate_section(content: &str, code: &str, mode: ScanMode) -> Result<Section> {
    let marker = section_marker(code);

    let marker_start = find_marker(content, &marker).ok_or_else(|| Error::MarkerNotFound {
        marker: marker.clone(),
    })?;

    let occurrences = count_markers(content, &marker);
    if occurrences > 1 {
        tracing::debug!(%marker, occurrences, "marker is not unique, using first occurrence");
    }

    let body_start = marker_start + marker.len();
    match scan_to_close(content, body_start, mode) {
        Scan::Closed(close) => Ok(Section {
            marker_start,
            body_start,
            close,
        }),
        Scan::Open { depth } => Err(Error::UnbalancedSection { marker, depth }),
    }
}
