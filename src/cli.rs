//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use tagspan_core::ExportFormat;

/// Extract and compare hand-annotated entity spans.
///
/// Tagspan reads abstracts annotated with nested `<>…</>` tags and lists the
/// text of every tagged span at every nesting depth.
#[derive(Parser, Debug)]
#[command(name = "tagspan")]
#[command(author, version, about)]
pub struct Cli {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract every tagged span from one annotated file
    Extract(ExtractArgs),
    /// Compare the spans of several annotated files
    Compare(CompareArgs),
    /// Show the effective configuration
    Config(TagArgs),
}

/// Tag options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct TagArgs {
    /// Begin tag marker (default `<>`)
    #[arg(long, value_name = "TAG")]
    pub begin_tag: Option<String>,

    /// End tag marker (default `</>`)
    #[arg(long, value_name = "TAG")]
    pub end_tag: Option<String>,

    /// Fail when begin and end tag counts differ
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Annotated text file
    pub input: PathBuf,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_parser = clap::value_parser!(ExportFormat))]
    pub format: Option<ExportFormat>,

    #[command(flatten)]
    pub tags: TagArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Annotated text files, one per annotator
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Comma-separated column names (defaults to file stems)
    #[arg(short, long, value_delimiter = ',')]
    pub names: Vec<String>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub tags: TagArgs,
}
