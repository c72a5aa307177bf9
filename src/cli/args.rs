//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command line
#[derive(Parser)]
#[command(name = "nyingarn-phonetic")]
#[command(about = "Phonetic codes for Nyingarn spelling variants")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Log rule and pass activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Encode words (reads one word per line from stdin when none are given)
    Encode {
        /// Words to encode
        words: Vec<String>,

        /// Print only the codes
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run text through the phonetic token filter
    Filter {
        /// Text to filter (reads stdin when omitted)
        text: Option<String>,

        /// Emit codes alongside the original tokens instead of replacing them
        #[arg(short, long)]
        inject: bool,
    },

    /// Show every pass the encoder makes on a word
    Trace {
        /// Word to trace
        word: String,
    },

    /// List the rule table
    Rules {
        /// Only show rules of this stage
        #[arg(short, long)]
        stage: Option<u8>,
    },

    /// Show or change the filter settings file
    Config {
        /// Set whether the filter replaces tokens (true) or injects codes (false)
        #[arg(long)]
        set_replace: Option<bool>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
