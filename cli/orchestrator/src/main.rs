//! Quill CLI
//!
//! This binary renders serialized program models into source files and
//! manages the Quill configuration file.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use config::Config;
use quill_cli::{init_config, render_model, render_to_file, Result};

/// Command-line interface configuration for quill.
#[derive(Parser, Debug)]
#[command(
    name = "quill",
    about = "Structured source-code synthesis from a program model",
    version
)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available quill commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a JSON model into a source file
    Render {
        /// Path to the model JSON file
        model: PathBuf,

        /// Write to this file instead of the configured output directory
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the rendered source instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Write a default configuration file
    InitConfig {
        /// Destination (defaults to the user config directory)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Main entry point for the quill application.
fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render { model, output, stdout } => {
            let config = Config::load(cli.config.as_deref())?;
            let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
            logging::init(level, config.logging.file.as_deref())?;

            if stdout {
                print!("{}", render_model(&model, &config)?);
            } else {
                let path = render_to_file(&model, &config, output.as_deref())?;
                println!("Wrote {}", path.display());
            }
        }
        Commands::InitConfig { path, force } => {
            logging::init(cli.log_level.as_deref().unwrap_or("info"), None)?;

            let path = match path.or(cli.config) {
                Some(path) => path,
                None => Config::default_path()?,
            };
            init_config(&path, force)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }
    Ok(())
}
