//! OpenAI Provider Implementation
//!
//! Schema-constrained chat completions against the OpenAI API. The schema is
//! registered as a function/tool definition and `tool_choice` forces the
//! model to call it, so the returned payload is the function arguments JSON
//! rather than free text.
//!
//! # Features
//!
//! - Async HTTP communication via reqwest
//! - Configurable endpoint and model
//! - Optional retry with exponential backoff (off by default)
//! - Request timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use tradenote_llm::OpenAiProvider;
//!
//! // Credential is passed explicitly; from_env() reads OPENAI_API_KEY once
//! let provider = OpenAiProvider::new("sk-...", "gpt-3.5-turbo-1106");
//! ```

use crate::LlmError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tradenote_domain::{schema::SCHEMA_NAME, ChatMessage, LlmProvider};

/// Default OpenAI API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-1106";

/// Default timeout for a single HTTP request (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of attempts. One attempt means a single failure aborts
/// the extraction; raising this is an explicit hardening choice.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1;

/// Environment variable holding the API credential
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// OpenAI chat-completions provider
///
/// The credential is read once at construction and held immutably for the
/// life of the provider; core logic never reads ambient global state.
pub struct OpenAiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    max_attempts: u32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    tools: Vec<ToolDefinition<'a>>,
    tool_choice: Value,
    temperature: f32,
}

#[derive(Serialize)]
struct ToolDefinition<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    function: FunctionDefinition<'a>,
}

#[derive(Serialize)]
struct FunctionDefinition<'a> {
    name: &'static str,
    description: &'static str,
    parameters: &'a Value,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Deserialize)]
struct FunctionCall {
    arguments: String,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider with an explicit credential
    ///
    /// # Parameters
    ///
    /// - `api_key`: API credential
    /// - `model`: Model identifier (e.g. "gpt-3.5-turbo-1106")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key: api_key.into(),
            client,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Create a provider from the process environment
    ///
    /// Reads the credential from `OPENAI_API_KEY` once. Absence is a fatal
    /// configuration error; no extraction call should be attempted.
    pub fn from_env(model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            LlmError::Configuration(format!("{} is not set", API_KEY_VAR))
        })?;
        if api_key.is_empty() {
            return Err(LlmError::Configuration(format!("{} is empty", API_KEY_VAR)));
        }
        Ok(Self::new(api_key, model))
    }

    /// Override the API endpoint (e.g. for a compatible proxy)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the maximum number of attempts per completion
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Run one schema-constrained completion
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails, the credential is
    /// rejected, the rate limit is hit, the model is unknown, or the
    /// response carries no payload.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        schema: &Value,
    ) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages,
            tools: vec![ToolDefinition {
                kind: "function",
                function: FunctionDefinition {
                    name: SCHEMA_NAME,
                    description: "Structured data extracted from a trade notification message",
                    parameters: schema,
                },
            }],
            tool_choice: json!({"type": "function", "function": {"name": SCHEMA_NAME}}),
            temperature: 0.0,
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_attempts {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let completion =
                            response.json::<ChatCompletionResponse>().await.map_err(|e| {
                                LlmError::InvalidResponse(format!(
                                    "Failed to parse response: {}",
                                    e
                                ))
                            })?;
                        return extract_payload(completion);
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_attempts {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max attempts exceeded".to_string())))
    }
}

/// Pull the schema payload out of a completion response.
///
/// Prefers the forced tool call's arguments; falls back to plain message
/// content for backends that answer without a tool call.
fn extract_payload(completion: ChatCompletionResponse) -> Result<String, LlmError> {
    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("Response has no choices".to_string()))?;

    if let Some(tool_calls) = choice.message.tool_calls {
        if let Some(call) = tool_calls.into_iter().next() {
            return Ok(call.function.arguments);
        }
    }

    choice
        .message
        .content
        .ok_or_else(|| LlmError::InvalidResponse("Response has no payload".to_string()))
}

impl LlmProvider for OpenAiProvider {
    type Error = LlmError;

    fn complete(&self, messages: &[ChatMessage], schema: &Value) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call; the extraction client invokes
        // this from a blocking task, never from inside a runtime.
        tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Communication(format!("Runtime error: {}", e)))?
            .block_on(async { self.complete(messages, schema).await })
    }
}
