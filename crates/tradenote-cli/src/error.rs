//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider error (credential or backend construction)
    #[error("Provider error: {0}")]
    Provider(#[from] tradenote_llm::LlmError),

    /// Extraction pipeline error
    #[error("Extraction error: {0}")]
    Extraction(#[from] tradenote_extractor::ExtractError),

    /// Loaded content is empty
    #[error("No content loaded from '{0}'")]
    EmptyContent(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
