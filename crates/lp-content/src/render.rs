//! TypeScript object-literal rendering.
//!
//! Output follows the layout of `i18n/learningPath.ts`: modules indented
//! four spaces inside a language array, fields six, units eight, strings in
//! single quotes, one unit per line.

use crate::schema::{LearningModule, Unit};
use std::fmt::Write;

const MODULE_INDENT: &str = "    ";
const FIELD_INDENT: &str = "      ";
const UNIT_INDENT: &str = "        ";

/// Quote `s` as a single-quoted TypeScript string.
///
/// Only `\` and `'` are escaped, plus line breaks; all other characters,
/// including non-Latin scripts and emoji, are emitted as-is.
///
/// ```
/// assert_eq!(lp_content::ts_string("Dire l'ora"), r"'Dire l\'ora'");
/// ```
pub fn ts_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn render_unit(unit: &Unit) -> String {
    format!(
        "{{ unitId: {}, title: {}, emoji: {}, words: [] }}",
        ts_string(&unit.unit_id),
        ts_string(&unit.title),
        ts_string(&unit.emoji)
    )
}

/// Render `module` as an array element, starting on a new line.
///
/// The leading newline lets the element follow the previous element's
/// closing brace directly.
pub fn render_module(module: &LearningModule) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = write!(out, "\n{MODULE_INDENT}{{\n");
    let _ = writeln!(out, "{FIELD_INDENT}level: {},", ts_string(&module.level));
    let _ = writeln!(out, "{FIELD_INDENT}theme: {},", ts_string(&module.theme));
    let _ = writeln!(
        out,
        "{FIELD_INDENT}description: {},",
        ts_string(&module.description)
    );

    if module.units.is_empty() {
        let _ = writeln!(out, "{FIELD_INDENT}units: []");
    } else {
        let units: Vec<String> = module
            .units
            .iter()
            .map(|u| format!("{UNIT_INDENT}{}", render_unit(u)))
            .collect();
        let _ = writeln!(out, "{FIELD_INDENT}units: [");
        let _ = writeln!(out, "{}", units.join(",\n"));
        let _ = writeln!(out, "{FIELD_INDENT}]");
    }

    let _ = write!(out, "{MODULE_INDENT}}}");
    out
}
