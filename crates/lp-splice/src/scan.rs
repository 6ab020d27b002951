//! Bracket matching by nesting counter.

/// How the scanner treats quoted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Count every `[` and `]` byte.
    #[default]
    Raw,
    /// Ignore brackets between matching `'`, `"` or `` ` `` quotes.
    /// A backslash escapes the next byte inside a literal.
    QuoteAware,
}

/// Result of a bracket scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// Byte offset of the bracket that brought the counter to zero.
    Closed(usize),
    /// Input ended with `depth` brackets still open.
    Open { depth: usize },
}

/// Scan forward from `from` with the counter starting at 1.
///
/// `from` must be the byte right after an already-consumed opening bracket.
/// Brackets are ASCII, so byte-wise scanning never splits a UTF-8 sequence.
///
/// ```
/// use lp_splice::scan::{Scan, ScanMode, scan_to_close};
///
/// let content = "hi: [ [x], {y} ],";
/// assert_eq!(scan_to_close(content, 5, ScanMode::Raw), Scan::Closed(15));
/// ```
pub fn scan_to_close(content: &str, from: usize, mode: ScanMode) -> Scan {
    let bytes = content.as_bytes();
    let mut depth: usize = 1;
    let mut quote: Option<u8> = None;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(from) {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == q {
                quote = None;
            }
            continue;
        }

        match b {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Scan::Closed(i);
                }
            }
            b'\'' | b'"' | b'`' if mode == ScanMode::QuoteAware => quote = Some(b),
            _ => {}
        }
    }

    Scan::Open { depth }
}
