//! MechTree CLI - Command-line interface for the skill tree export

pub mod commands;
pub mod progress;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "mechtree")]
#[command(about = "MechTree: MechWarrior Online skill tree data export", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to mechtree.toml in the working directory, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the game's XML files
    #[arg(long, global = true)]
    src: Option<PathBuf>,

    /// Output directory
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Runs the component and aggregate exports when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = Config::discover(self.config.as_deref())?;
        if let Some(src) = &self.src {
            config.paths.src.clone_from(src);
        }
        if let Some(out) = &self.out {
            config.paths.out.clone_from(out);
        }
        Ok(config)
    }
}

/// Run the MechTree CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config()?;
    match &cli.command {
        Some(command) => command.execute(&config),
        None => commands::export::all(&config),
    }
}
