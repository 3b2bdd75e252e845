use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clipstitch")]
#[command(author, version, about = "Transcript search playback and broadcast segment stitching")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a segment name and display its time information
    Parse {
        /// Segment file name or path
        #[arg(required = true)]
        identifier: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search transcripts for a word or phrase
    Search {
        /// Text to search for
        #[arg(required = true)]
        query: String,
    },

    /// Open the segment containing an instant and optionally merge neighbors
    Open {
        /// Channel name
        #[arg(long)]
        channel: String,

        /// Instant to open (RFC 3339; UTC when no offset is given)
        #[arg(long)]
        timestamp: String,

        /// Neighbors to add before the segment
        #[arg(long, default_value = "0")]
        back: usize,

        /// Neighbors to add after the segment
        #[arg(long, default_value = "0")]
        forward: usize,

        /// Merge the selection and print its download URL
        #[arg(long)]
        download: bool,

        /// Merge the selection and save it to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
