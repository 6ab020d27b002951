//! Error types for lp-content

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] lp_fs::Error),

    #[error("Failed to parse built-in catalog: {0}")]
    BuiltinCatalog(String),

    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            message: message.into(),
        }
    }
}
