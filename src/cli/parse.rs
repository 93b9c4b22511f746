//! CLI parse: clap types for poi. No behavior; definitions only.

use crate::digest::HashAlgorithm;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// poi - Content-addressed Merkle commitments for proof-of-invention file sets
#[derive(Parser)]
#[command(name = "poi")]
#[command(about = "Commit a set of files to a single Merkle root")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (config/config.toml is read from here)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Hash files and build the proof-of-invention commitment
    Commit {
        /// Files to commit, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Declared mime type applied to every file
        #[arg(long)]
        mime: Option<String>,
        /// Override the configured recipient
        #[arg(long)]
        recipient: Option<String>,
        /// Override the configured digest (sha256, blake3)
        #[arg(long)]
        algorithm: Option<HashAlgorithm>,
        /// Output format (json or text)
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Print file digests without building a tree
    Hash {
        /// Files to hash, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Declared mime type applied to every file
        #[arg(long)]
        mime: Option<String>,
        /// Override the configured digest (sha256, blake3)
        #[arg(long)]
        algorithm: Option<HashAlgorithm>,
        /// Output format (json or text)
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Show the effective configuration
    Config,
}
