//! Tradenote CLI library.
//!
//! Command-line front end for the extraction pipeline: loads notification
//! content from disk, runs an extraction against the configured model
//! backend, and optionally verifies the result against an expected fixture.

pub mod cli;
pub mod commands;
pub mod error;
pub mod loader;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
