//! Text splicing primitives for learnpath-patch.
//!
//! The target file is treated as an opaque string. A section is found by a
//! literal marker (`hi: [`), its end by counting `[` and `]` from just after
//! the marker, and new elements are spliced in before the closing bracket:
//!
//! ```text
//! hi: [ {a}, {b} ],
//!     ^          ^
//!     body_start close
//! ```
//!
//! Nothing here understands the surrounding syntax. A `]` inside a string
//! literal throws the raw count off; [`ScanMode::QuoteAware`] skips quoted
//! text for files where that matters.

pub mod error;
pub mod marker;
pub mod scan;
pub mod section;
pub mod writer;

pub use error::{Error, Result};
pub use marker::{count_markers, find_marker, section_marker};
pub use scan::{ScanMode, scan_to_close};
pub use section::{Section, locate_section};
pub use writer::{Splice, TailKind, append_element, insert_at, insertion_point, tail_kind};
