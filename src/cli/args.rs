//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Prewarm - Cache Warmup Orchestrator
///
/// Pre-populates a web application's derived caches before traffic is
/// served and assembles the class-preload list they produce.
#[derive(Parser, Debug)]
#[command(name = "prewarm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PREWARM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip local prewarm.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Warm up the application caches
    Warmup(WarmupArgs),

    /// List registered cache warmers
    List(ListArgs),

    /// Initialize a project-local prewarm.toml config
    Init(InitArgs),
}

/// Arguments for the warmup command
#[derive(Parser, Debug)]
pub struct WarmupArgs {
    /// Run only the named warmer instead of the full pass
    pub warmer: Option<String>,

    /// Skip warmers that declare themselves optional
    #[arg(long)]
    pub no_optional_warmers: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite existing prewarm.toml
    #[arg(short, long)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// Output format for list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
