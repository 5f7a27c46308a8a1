//! Tradenote LLM Provider Layer
//!
//! Pluggable implementations of the `LlmProvider` trait from
//! `tradenote-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI chat-completions integration with
//!   function/tool calling
//!
//! # Examples
//!
//! ```
//! use tradenote_llm::MockProvider;
//! use tradenote_domain::{ChatMessage, LlmProvider};
//!
//! let provider = MockProvider::new("{}");
//! let messages = [ChatMessage::user("test prompt")];
//! let schema = serde_json::json!({"type": "object"});
//! let result = provider.complete(&messages, &schema).unwrap();
//! assert_eq!(result, "{}");
//! ```

#![warn(missing_docs)]

pub mod openai;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tradenote_domain::{ChatMessage, LlmProvider};

pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Missing or invalid credential; the provider cannot be constructed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured payloads without making any network calls. A FIFO
/// queue of responses can be loaded ahead of the default response, which is
/// how retry sequences are exercised in tests.
///
/// # Examples
///
/// ```
/// use tradenote_llm::MockProvider;
/// use tradenote_domain::{ChatMessage, LlmProvider};
///
/// let mut provider = MockProvider::new("default");
/// provider.queue_response("first");
///
/// let messages = [ChatMessage::user("prompt")];
/// let schema = serde_json::json!({});
/// assert_eq!(provider.complete(&messages, &schema).unwrap(), "first");
/// assert_eq!(provider.complete(&messages, &schema).unwrap(), "default");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    queued: Arc<Mutex<VecDeque<String>>>,
    forced_error: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed payload for all calls
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            queued: Arc::new(Mutex::new(VecDeque::new())),
            forced_error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a payload to be returned before the default response
    pub fn queue_response(&mut self, response: impl Into<String>) {
        self.queued.lock().unwrap().push_back(response.into());
    }

    /// Make every subsequent call fail with a communication error
    pub fn fail_with(&mut self, message: impl Into<String>) {
        *self.forced_error.lock().unwrap() = Some(message.into());
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    fn complete(
        &self,
        _messages: &[ChatMessage],
        _schema: &serde_json::Value,
    ) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(message) = self.forced_error.lock().unwrap().as_ref() {
            return Err(LlmError::Communication(message.clone()));
        }

        if let Some(next) = self.queued.lock().unwrap().pop_front() {
            return Ok(next);
        }

        Ok(self.default_response.clone())
    }
}
