//! Error types for lp-core
//!
//! Per-language failures are not errors here; they become
//! [`Outcome::Skipped`](crate::Outcome::Skipped). Only IO and catalog
//! problems abort a run.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] lp_fs::Error),

    #[error(transparent)]
    Content(#[from] lp_content::Error),
}
