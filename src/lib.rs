#![warn(missing_docs)]
//! Library support for the mako CLI.

/// Command-line interface wiring and dispatch.
mod cli;
/// Command implementations.
mod commands;
/// Error handling for the crate.
mod error;
/// Color palette and styling for CLI output.
mod palette;
/// Document templates for scaffolding.
mod template;

pub use crate::error::{Error, Result};

/// Run the CLI, returning a structured error on failure.
pub async fn run() -> Result<()> {
    cli::run().await
}
