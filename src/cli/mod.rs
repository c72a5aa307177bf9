//! CLI interface for nyingarn-phonetic
//!
//! Provides command-line utilities for encoding words, filtering text and
//! inspecting the rule table.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands};
pub use paths::{config_dir, load_settings, resolve_settings, save_settings};
