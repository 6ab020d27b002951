//! Element splicing.
//!
//! New elements go directly after the last existing element of a section,
//! ahead of whatever whitespace precedes the closing bracket, so the
//! bracket keeps its original line and indentation. When the last line
//! before the bracket ends in a `//` comment, they go directly before the
//! bracket instead.

use crate::error::{Error, Result};
use crate::section::Section;

/// Separator placed between array elements.
pub const SEPARATOR: &str = ",";

/// What precedes the insertion point inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailKind {
    /// Only whitespace between the brackets.
    Empty,
    /// The last element, with no separator after it.
    Element,
    /// A trailing separator after the last element.
    Separator,
}

/// A completed splice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splice {
    /// Byte offset the fragment was inserted at.
    pub offset: usize,
    /// Byte length of the inserted fragment, including any separator.
    pub len: usize,
}

/// The end of a section body, split into code and a trailing line comment.
struct Tail<'a> {
    /// Body up to the last non-whitespace byte, comment excluded.
    code: &'a str,
    /// Whether the last non-blank line ends in a `//` comment.
    commented: bool,
}

fn tail<'a>(content: &'a str, section: &Section) -> Tail<'a> {
    let trimmed = section.body(content).trim_end();
    let line_start = trimmed.rfind('\n').map_or(0, |i| i + 1);
    match trimmed[line_start..].find("//") {
        Some(pos) => Tail {
            code: trimmed[..line_start + pos].trim_end(),
            commented: true,
        },
        None => Tail {
            code: trimmed,
            commented: false,
        },
    }
}

/// Byte offset right after the last non-whitespace byte of the section body,
/// or the closing bracket itself when that byte ends a line comment.
pub fn insertion_point(content: &str, section: &Section) -> usize {
    let tail = tail(content, section);
    if tail.commented {
        section.close
    } else {
        section.body_start + tail.code.len()
    }
}

/// Classify the end of the section body, ignoring a trailing line comment.
pub fn tail_kind(content: &str, section: &Section) -> TailKind {
    let trimmed = tail(content, section).code;
    if trimmed.trim_start().is_empty() {
        TailKind::Empty
    } else if trimmed.ends_with(SEPARATOR) {
        TailKind::Separator
    } else {
        TailKind::Element
    }
}

/// Insert `text` at byte `offset`.
///
/// # Errors
/// Returns `Error::InvalidOffset` if `offset` is past the end or splits a
/// multi-byte character.
pub fn insert_at(content: &mut String, offset: usize, text: &str) -> Result<()> {
    if !content.is_char_boundary(offset) {
        return Err(Error::InvalidOffset {
            offset,
            len: content.len(),
        });
    }
    content.insert_str(offset, text);
    Ok(())
}

/// Append `element` as the new last element of `section`.
///
/// A separator is prepended unless the section is empty or already ends
/// with one. `section` must have been located in the current `content`.
///
/// # Example
/// ```
/// use lp_splice::{ScanMode, append_element, locate_section};
///
/// let mut content = String::from("hi: [ {a}, {b} ],");
/// let section = locate_section(&content, "hi", ScanMode::Raw).unwrap();
/// let splice = append_element(&mut content, &section, " {c}").unwrap();
///
/// assert_eq!(content, "hi: [ {a}, {b}, {c} ],");
/// assert_eq!(splice.offset, 14);
/// assert_eq!(splice.len, 5);
/// ```
pub fn append_element(content: &mut String, section: &Section, element: &str) -> Result<Splice> {
    let offset = insertion_point(content, section);
    let fragment = match tail_kind(content, section) {
        TailKind::Element => format!("{}{}", SEPARATOR, element),
        TailKind::Empty | TailKind::Separator => element.to_string(),
    };

    insert_at(content, offset, &fragment)?;

    Ok(Splice {
        offset,
        len: fragment.len(),
    })
}
