//! Content loading collaborator.
//!
//! The pipeline's only contract with content loading is: given a file path,
//! receive back a non-empty text string. Container-format decoding
//! (.eml/.msg MIME parsing) is a document-loading concern outside this
//! binary; the files handed in here are already plain text.

use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;

/// Load message content from a file path.
pub fn load_content(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(CliError::EmptyContent(path.display().to_string()));
    }

    Ok(content)
}
