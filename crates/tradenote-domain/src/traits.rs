//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Provider implementations live in other crates.

use crate::message::ChatMessage;
use serde_json::Value;

/// Trait for language-model backend operations
///
/// Implemented by the infrastructure layer (tradenote-llm). One call is one
/// billed request/response cycle against the backend; implementations must
/// treat it as a fallible external resource.
pub trait LlmProvider {
    /// Error type for provider operations
    type Error;

    /// Run one completion constrained to the given schema.
    ///
    /// Returns the raw JSON payload the model produced for the schema
    /// (tool-call arguments or plain message content). Parsing that payload
    /// into a typed value is the caller's concern.
    fn complete(&self, messages: &[ChatMessage], schema: &Value) -> Result<String, Self::Error>;
}
