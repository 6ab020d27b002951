//! Dry-run preview as a unified diff.

use similar::TextDiff;

/// Unified line diff from `before` to `after`, labelled with `name`.
///
/// Empty when the texts are equal.
pub fn unified_diff(name: &str, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }

    TextDiff::from_lines(before, after)
        .unified_diff()
        .context_radius(2)
        .header(&format!("a/{}", name), &format!("b/{}", name))
        .to_string()
}
