//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use bugform::config::Config;
use bugform::output::OutputMode;

/// bugform - Extract structured bug reports from templated comments
#[derive(Parser, Debug)]
#[command(
    name = "bugform",
    version,
    about = "Extract structured bug reports from templated comments",
    long_about = "Turn a filled-in bug template comment into a structured record.\n\n\
                  Sections are split on fixed anchors, version ranges are expanded,\n\
                  and every field that could not be read is reported."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.config/bugform/config.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// bugform subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract reports from comments (reads stdin when no file is given)
    Parse {
        /// Comment files; `-` reads stdin
        files: Vec<PathBuf>,

        /// Fail if any field error was found
        #[arg(long)]
        strict: bool,
    },

    /// Check whether comments follow the bug template
    Detect {
        /// Comment files; `-` reads stdin
        files: Vec<PathBuf>,
    },

    /// Show the active section anchors
    Anchors,

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Parse { files, strict }) => {
            let config = Config::load(cli.config.as_deref())?;
            commands::parse(files, strict, &config, output_mode)
        },
        Some(Command::Detect { files }) => {
            let config = Config::load(cli.config.as_deref())?;
            commands::detect(files, &config, output_mode)
        },
        Some(Command::Anchors) => {
            let config = Config::load(cli.config.as_deref())?;
            commands::anchors(&config, output_mode)
        },
        Some(Command::Init { force }) => commands::init(cli.config.as_deref(), force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("bugform v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("bugform v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'bugform --help' for usage");
                println!("Run 'bugform parse <file>' to extract a report");
            }
            Ok(())
        },
    }
}
