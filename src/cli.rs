//! CLI parsing and command dispatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{commands, error::Result};

/// Parsed command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "mako",
    version,
    about = "Validate, inspect, and scaffold MAKO content files"
)]
struct Cli {
    /// Control colored output.
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorMode,
    /// Command to execute.
    #[command(subcommand)]
    command: Command,
}

/// Supported color output modes.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorMode {
    /// Only colorize when stdout is a TTY.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}

// Commands are ordered alphabetically - maintain this order.
/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a new .mako.md file from a template.
    Init {
        /// Output file path.
        file: PathBuf,
        /// Content type of the template (product, article, docs, or any custom type).
        #[arg(long = "type", short = 't', value_name = "TYPE", default_value = "article")]
        content_type: String,
        /// Entity name for the new document.
        #[arg(long, value_name = "NAME", default_value = "Untitled")]
        entity: String,
        /// Language code for the new document.
        #[arg(long, value_name = "CODE", default_value = "en")]
        lang: String,
    },
    /// Display detailed information about a MAKO file.
    Inspect {
        /// Path of the file to inspect.
        file: PathBuf,
        /// Emit the report as JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },
    /// Validate .mako.md files against the MAKO schema.
    Validate {
        /// Glob pattern selecting the files to validate (e.g. "content/**/*.mako.md").
        pattern: String,
        /// Treat warnings as failures.
        #[arg(long)]
        strict: bool,
    },
}

/// Run the requested command.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let color = cli.color.into_choice();

    // Match arms are ordered alphabetically - maintain this order.
    match cli.command {
        Command::Init {
            file,
            content_type,
            entity,
            lang,
        } => commands::init::run(color, file, &content_type, &entity, &lang).await,
        Command::Inspect { file, json } => commands::inspect::run(color, file, json).await,
        Command::Validate { pattern, strict } => {
            commands::validate::run(color, &pattern, strict).await
        }
    }
}

impl ColorMode {
    /// Convert a CLI color mode into a color choice.
    fn into_choice(self) -> commands::ColorChoice {
        match self {
            Self::Auto => commands::ColorChoice::Auto,
            Self::Always => commands::ColorChoice::Always,
            Self::Never => commands::ColorChoice::Never,
        }
    }
}
