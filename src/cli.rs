//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Live snapshots and change watching for a git working tree
#[derive(Parser, Debug)]
#[command(name = "gitview")]
#[command(about = "Live repository view engine: snapshots and change watching")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all snapshot commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for gitview
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tracked files under the repository root
    Files(RepoArgs),

    /// List branch-head refs
    Refs(RepoArgs),

    /// List loose objects with their kind and content
    Objects(RepoArgs),

    /// Show the HEAD pointer file
    Head(RepoArgs),

    /// Show the staging index
    Index(IndexArgs),

    /// Watch a repository and stream change events to stdout
    Watch(WatchArgs),
}

/// Arguments shared by the snapshot commands
#[derive(Args, Debug)]
pub struct RepoArgs {
    /// Path to the repository root
    #[arg(value_name = "REPO", default_value = ".")]
    pub repo: PathBuf,
}

/// Arguments for the index command
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Path to the repository root
    #[arg(value_name = "REPO", default_value = ".")]
    pub repo: PathBuf,

    /// Print the raw `ls-files --stage` listing instead of parsed entries
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the watch command
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Path to the repository root
    #[arg(value_name = "REPO", default_value = ".")]
    pub repo: PathBuf,

    /// Event-loop poll interval in milliseconds
    #[arg(long, value_name = "MS", default_value = "100")]
    pub poll_interval_ms: u64,
}

/// Output format for snapshot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}
