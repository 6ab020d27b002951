//! Literal section markers.

/// Build the marker that opens the array-valued section for `code`.
///
/// ```
/// assert_eq!(lp_splice::section_marker("hi"), "hi: [");
/// ```
pub fn section_marker(code: &str) -> String {
    format!("{}: [", code)
}

/// Byte offset of the first occurrence of `marker`, if any.
pub fn find_marker(content: &str, marker: &str) -> Option<usize> {
    content.find(marker)
}

/// Number of non-overlapping occurrences of `marker`.
pub fn count_markers(content: &str, marker: &str) -> usize {
    if marker.is_empty() {
        return 0;
    }
    content.matches(marker).count()
}
