//! CLI module for Spole.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Spole - Transcript Semantic Search
///
/// A local-first CLI tool for finding moments in video transcripts by meaning.
/// The name "Spole" comes from the Norwegian word for "rewind."
#[derive(Parser, Debug)]
#[command(name = "spole")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a free-text question against a transcript
    Query {
        /// Path to the transcript JSON file
        transcript: String,

        /// The question to search for
        question: String,

        /// Number of results to return
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },

    /// Show how a transcript would be chunked, without embedding it
    Chunks {
        /// Path to the transcript JSON file
        transcript: String,
    },

    /// Clean a transcript file and write the result
    Clean {
        /// Path to the transcript JSON file
        input: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
