//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tradenote CLI - Extract structured trade data from notification messages.
#[derive(Debug, Parser)]
#[command(name = "tradenote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract trade data from a message file
    Extract(ExtractArgs),

    /// Print the JSON schema the model output must conform to
    Schema,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Path to the message content file
    pub file: PathBuf,

    /// Expected-output fixture (JSON); when given, the result is compared
    /// and a mismatch sets a non-zero exit code
    #[arg(short, long)]
    pub expected: Option<PathBuf>,

    /// Extractor configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Model identifier to use
    #[arg(short, long, env = "TRADENOTE_MODEL")]
    pub model: Option<String>,

    /// Extraction timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Issue one corrective retry when the response fails schema validation
    #[arg(long)]
    pub retry: bool,
}
