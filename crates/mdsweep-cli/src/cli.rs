//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Remove promotional references and the audio-edition section from
/// generated Markdown digests.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// File or directory to clean.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,
}
