//! Tradenote Domain Layer
//!
//! This crate contains the core data model for trade-notification extraction.
//! It defines the entities the extraction pipeline produces, the chat-message
//! value types handed to a language model, the JSON schema description that
//! steers the model's output, and the trait interface every model backend
//! implements.
//!
//! ## Key Concepts
//!
//! - **EmailData**: the root extraction result - everything pulled from one
//!   trade-notification message
//! - **Etf / Instrument**: the nested trade entities, an ownership tree with
//!   no shared or back references
//! - **Schema description**: the declarative shape surfaced to the model as
//!   field-level hints
//! - **LlmProvider**: the boundary trait for model backends
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - Nothing here performs I/O; provider implementations live in other crates
//! - Values are constructed once per extraction and never mutated

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod message;
pub mod model;
pub mod schema;
pub mod traits;

// Re-exports for convenience
pub use message::{ChatMessage, Role};
pub use model::{EmailData, Etf, Instrument};
pub use schema::email_data_schema;
pub use traits::LlmProvider;
