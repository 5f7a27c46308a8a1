//! Fixture comparison for verification runs

use crate::error::ExtractError;
use tracing::info;
use tradenote_domain::EmailData;

/// Outcome of comparing an extraction against an expected fixture.
///
/// The verdict is structural equality on [`EmailData`]: every field must
/// match exactly, nested lists in their existing order, floats with no
/// tolerance. The serialized lengths are diagnostic only and never affect
/// the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    /// Whether actual and expected are structurally equal
    pub matched: bool,

    /// Pretty-printed JSON length of the actual value
    pub actual_len: usize,

    /// Pretty-printed JSON length of the expected value
    pub expected_len: usize,
}

/// Compare an extraction result against an expected fixture.
pub fn verify(actual: &EmailData, expected: &EmailData) -> Result<ComparisonReport, ExtractError> {
    let actual_json = serde_json::to_string_pretty(actual)?;
    let expected_json = serde_json::to_string_pretty(expected)?;

    info!("Actual length: {}", actual_json.len());
    info!("Expected length: {}", expected_json.len());

    Ok(ComparisonReport {
        matched: actual == expected,
        actual_len: actual_json.len(),
        expected_len: expected_json.len(),
    })
}
