// src/cli/mod.rs
use clap::Parser;
use thiserror::Error;

use crate::generators::GeneratorError;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check password strength and generate random passwords", long_about = None)]
pub struct Args {
    /// Use JSON for output (one-shot commands only)
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute; starts the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("{0}")]
    Generator(#[from] GeneratorError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
