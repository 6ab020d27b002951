//! Error types for lp-splice

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Marker not found: '{marker}'")]
    MarkerNotFound { marker: String },

    #[error("Unbalanced section after '{marker}': {depth} bracket(s) still open at end of input")]
    UnbalancedSection { marker: String, depth: usize },

    #[error("Offset {offset} is not a character boundary (buffer length {len})")]
    InvalidOffset { offset: usize, len: usize },
}
