//! Error types for lp-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end the process with a non-zero exit code
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] lp_core::Error),

    #[error(transparent)]
    Content(#[from] lp_content::Error),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}
