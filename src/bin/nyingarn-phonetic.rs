//! nyingarn-phonetic - phonetic codes for Nyingarn spelling variants
//!
//! Encodes words, filters text and inspects the rule table.

use clap::Parser;
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use nyingarn_phonetic::cli::commands;
use nyingarn_phonetic::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "nyingarn_phonetic=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
