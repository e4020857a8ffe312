use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `gavel` binary.
#[derive(Debug, Parser)]
#[command(name = "gavel", version, about = "Municipal Legistar scraper")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch and normalize events for a time range.
    Scrape(ScrapeArgs),
    /// Probe whether a municipality yields ingestible events.
    Check(CheckArgs),
}

/// Arguments for `gavel scrape`.
#[derive(Clone, Debug, Args)]
pub struct ScrapeArgs {
    /// Start of the range in the municipality's local time,
    /// `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS` (default: two days back).
    #[arg(long)]
    pub begin: Option<String>,

    /// End of the range, same formats (default: now).
    #[arg(long)]
    pub end: Option<String>,

    /// Legistar client name (overrides configuration).
    #[arg(long)]
    pub client: Option<String>,

    /// Static reference data file (overrides configuration).
    #[arg(long)]
    pub static_data: Option<String>,

    /// Write events to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `gavel check`.
#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// How many days back to look for events.
    #[arg(long, default_value_t = 7)]
    pub days: u32,

    /// Legistar client name (overrides configuration).
    #[arg(long)]
    pub client: Option<String>,
}
