//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level declaration tagger for Kotlin sources
#[derive(Parser, Debug)]
#[command(name = "ktags")]
#[command(about = "Extracts class, function, typealias and constant tags from Kotlin sources")]
#[command(version)]
pub struct Cli {
    /// Files or directories to tag
    #[arg(value_name = "PATH", required_unless_present_any = ["list_kinds", "list_extensions"])]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, env = "KTAGS_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Kinds to emit, as letters (`cfC`) or names (`class,function`)
    #[arg(short, long, env = "KTAGS_KINDS")]
    pub kinds: Option<String>,

    /// Maximum directory recursion depth
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Configuration file (defaults to ./ktags.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the kind table and exit
    #[arg(long)]
    pub list_kinds: bool,

    /// Print the handled file extensions and exit
    #[arg(long)]
    pub list_extensions: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ctags-compatible tag file lines - default
    #[default]
    Ctags,
    /// JSON - one record per file
    Json,
    /// TOON (Token-Oriented Object Notation)
    Toon,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
