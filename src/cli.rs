use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "podchap")]
#[command(about = "CLI tool for assembling ID3v2 chapter metadata for podcast episodes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// sox binary to use (overrides [tools] sox in config)
    #[arg(long, global = true)]
    pub sox: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Concatenate a manifest's segments into one episode and tag its chapters
    Build {
        /// Path to the episode manifest (TOML)
        manifest: PathBuf,

        /// Combined episode path (overrides the manifest and config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Probe segments one at a time instead of concurrently
        #[arg(long)]
        sequential: bool,
    },

    /// Show the chapter tree a manifest would produce, without writing anything
    Plan {
        /// Path to the episode manifest (TOML)
        manifest: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Probe segments one at a time instead of concurrently
        #[arg(long)]
        sequential: bool,
    },

    /// Attach a manifest's chapters to an existing combined episode
    Tag {
        /// Path to the episode manifest (TOML)
        manifest: PathBuf,

        /// Combined episode file to tag
        file: PathBuf,

        /// Actually write the tag (default: dry-run)
        #[arg(long)]
        no_dry_run: bool,

        /// Skip creating backup file
        #[arg(long = "no-backup-i-void-my-warranty")]
        no_backup: bool,

        /// Probe segments one at a time instead of concurrently
        #[arg(long)]
        sequential: bool,
    },

    /// Print the duration of audio segments as chapter ranges would see it
    Probe {
        /// Audio segments to measure
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display the chapter frames stored in an mp3's ID3 tag
    Show {
        /// Path to the mp3 file
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
