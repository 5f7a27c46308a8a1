//! Core extraction client

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::parser::parse_response;
use crate::prompt;
use serde_json::Value;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use tradenote_domain::{email_data_schema, ChatMessage, EmailData, LlmProvider};

/// Performs one request/response cycle against a model backend and returns
/// a validated [`EmailData`].
///
/// One message pair in, one typed value out. No caching, no batching, no
/// concurrency; every call is billed and rate-limited by the backend.
pub struct Extractor<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    config: ExtractorConfig,
    schema: Value,
}

impl<L> Extractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Extractor
    ///
    /// Fails with [`ExtractError::Configuration`] on an invalid config;
    /// no extraction call is attempted from a misconfigured client.
    pub fn new(provider: L, config: ExtractorConfig) -> Result<Self, ExtractError> {
        config.validate().map_err(ExtractError::Configuration)?;

        Ok(Self {
            provider: Arc::new(provider),
            config,
            schema: email_data_schema(),
        })
    }

    /// Extract trade-notification data from raw content
    pub async fn extract(&self, content: &str) -> Result<EmailData, ExtractError> {
        let content_len = content.chars().count();
        if content_len > self.config.max_content_length {
            return Err(ExtractError::ContentTooLong(
                content_len,
                self.config.max_content_length,
            ));
        }

        info!(
            "Starting extraction with model '{}', content length {}",
            self.config.model, content_len
        );

        let messages = prompt::render_prompt(content);
        let payload = self.call_model(messages.clone()).await?;

        debug!("Model payload length: {} chars", payload.len());

        match parse_response(&payload) {
            Ok(data) => {
                info!("Extraction complete: {} ETFs", data.etfs.len());
                Ok(data)
            }
            Err(ExtractError::SchemaValidation(reason)) if self.config.schema_retry => {
                warn!("Schema validation failed, issuing corrective retry: {}", reason);

                let followup = prompt::render_corrective(&messages, &payload, &reason);
                let payload = self.call_model(followup).await?;
                let data = parse_response(&payload)?;

                info!("Corrective retry succeeded: {} ETFs", data.etfs.len());
                Ok(data)
            }
            Err(e) => Err(e),
        }
    }

    /// Issue one model call under the configured deadline
    async fn call_model(&self, messages: Vec<ChatMessage>) -> Result<String, ExtractError> {
        let provider = Arc::clone(&self.provider);
        let schema = self.schema.clone();
        let deadline = self.config.extraction_timeout();
        let deadline_secs = self.config.extraction_timeout_secs;

        // The provider trait is sync; run it off the async runtime
        let call = tokio::task::spawn_blocking(move || {
            provider
                .complete(&messages, &schema)
                .map_err(|e| ExtractError::Transport(e.to_string()))
        });

        match timeout(deadline, call).await {
            Err(_) => Err(ExtractError::Timeout(deadline_secs)),
            Ok(joined) => {
                joined.map_err(|e| ExtractError::Transport(format!("Task join error: {}", e)))?
            }
        }
    }
}
