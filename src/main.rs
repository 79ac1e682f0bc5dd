//! CLI entry point for the tagspan tool.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod app_config;
mod cli;
mod commands;

use app_config::load_default_file_config;
use cli::{Cli, Command};

fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Logs go to stderr so extracted output can be piped
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?cli, "CLI arguments parsed");

    let config = load_default_file_config()?;
    if let Some(path) = &config.path {
        debug!(path = %path.display(), loaded = config.loaded_from_file(), "config resolved");
    }

    match &cli.command {
        Command::Extract(args) => commands::run_extract_command(args, &config),
        Command::Compare(args) => commands::run_compare_command(args, &config),
        Command::Config(args) => commands::run_config_show_command(args, &config),
    }
}
