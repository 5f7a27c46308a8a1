//! Error types for the extraction pipeline

use thiserror::Error;

/// Errors that can occur during extraction
///
/// All variants abort the in-flight extraction and propagate to the caller
/// unmodified; there is no local recovery or partial-result return. A
/// comparison mismatch is a boolean verdict, never an error.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Missing or invalid configuration; fatal, no extraction is attempted
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network, auth or rate-limit failure from the model backend
    #[error("Transport error: {0}")]
    Transport(String),

    /// The model call exceeded the configured deadline
    #[error("Extraction timed out after {0}s")]
    Timeout(u64),

    /// Content exceeds maximum length
    #[error("Content too long: {0} chars (max: {1})")]
    ContentTooLong(usize, usize),

    /// The model's response cannot be parsed into the schema
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    /// JSON serialization error outside the schema-parse path
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
