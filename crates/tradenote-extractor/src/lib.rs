//! Tradenote Extractor
//!
//! Converts an unstructured trade-notification message into a typed
//! [`tradenote_domain::EmailData`] using a schema-constrained LLM call.
//!
//! # Overview
//!
//! The pipeline is deliberately thin: a fixed prompt is rendered around the
//! raw content, one request carrying the prompt and the JSON schema goes to
//! the model backend, and the response payload is parsed all-or-nothing into
//! the typed result. A comparator checks an extraction against a known-good
//! fixture for verification runs.
//!
//! # Architecture
//!
//! ```text
//! Text → Prompt → LlmProvider → JSON payload → EmailData → Comparator
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use tradenote_extractor::{Extractor, ExtractorConfig};
//! use tradenote_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(r#"{
//!     "etfs": [],
//!     "trade_notification_date": "2022-01-01",
//!     "sender_email_id": "ark@ark-funds.com",
//!     "email_date_time": "1/12/2024"
//! }"#);
//! let config = ExtractorConfig::default();
//!
//! let extractor = Extractor::new(provider, config)?;
//! let data = extractor.extract("No trades today.").await?;
//!
//! assert!(data.etfs.is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod compare;
mod config;
mod error;
mod extractor;
mod parser;
mod prompt;


pub use compare::{verify, ComparisonReport};
pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use extractor::Extractor;
pub use prompt::render_prompt;
