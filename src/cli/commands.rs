//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};

use crate::filter::{whitespace_tokens, FilterSettings, PhoneticFilter, Token};
use crate::phonetic::{NyingarnPhonetic, RuleTable};

use super::args::{Cli, Commands};
use super::paths::{default_config_path, load_settings, resolve_settings, save_settings};

/// Execute a CLI command, printing to stdout
pub fn execute(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_to(cli.command, cli.config.as_deref(), &mut out)
}

/// Execute a CLI command, printing to `out`
pub fn execute_to<W: Write>(command: Commands, config: Option<&Path>, out: &mut W) -> Result<()> {
    match command {
        Commands::Encode { words, quiet } => {
            let words = if words.is_empty() {
                read_stdin_words()?
            } else {
                words
            };
            cmd_encode(&words, quiet, out)
        }
        Commands::Filter { text, inject } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read stdin")?;
                    buf
                }
            };
            cmd_filter(&text, config, inject, out)
        }
        Commands::Trace { word } => cmd_trace(&word, out),
        Commands::Rules { stage } => cmd_rules(stage, out),
        Commands::Config { set_replace, reset } => cmd_config(config, set_replace, reset, out),
    }
}

fn read_stdin_words() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut words = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Encode command
pub fn cmd_encode<W: Write>(words: &[String], quiet: bool, out: &mut W) -> Result<()> {
    let encoder = NyingarnPhonetic::new()?;
    let codes = encoder.encode_batch(words)?;

    for (word, code) in words.iter().zip(&codes) {
        if quiet {
            writeln!(out, "{}", code)?;
        } else {
            writeln!(out, "{} {} {}", word, "→".cyan(), code.green())?;
        }
    }

    Ok(())
}

/// Filter command
pub fn cmd_filter<W: Write>(
    text: &str,
    config: Option<&Path>,
    inject: bool,
    out: &mut W,
) -> Result<()> {
    let mut settings = resolve_settings(config)?;
    if inject {
        settings.replace = false;
    }

    let encoder = NyingarnPhonetic::new()?;
    let tokens = PhoneticFilter::new(whitespace_tokens(text), encoder, settings)
        .collect::<crate::error::Result<Vec<Token>>>()?;

    let rendered: Vec<String> = tokens.iter().map(Token::to_string).collect();
    writeln!(out, "{}", rendered.join(" "))?;

    Ok(())
}

/// Trace command
pub fn cmd_trace<W: Write>(word: &str, out: &mut W) -> Result<()> {
    let encoder = NyingarnPhonetic::new()?;
    let steps = encoder.trace(word)?;

    let Some((cleaned, passes)) = steps.split_first() else {
        bail!("{:?} contains no letters", word);
    };

    writeln!(out, "  {:>8}: {}", "cleaned", cleaned.yellow())?;
    for (i, step) in passes.iter().enumerate() {
        writeln!(out, "  {:>8}: {}", format!("pass {}", i + 1), step)?;
    }
    let code = steps.last().unwrap_or(cleaned);
    writeln!(out, "  {:>8}: {}", "code", code.green().bold())?;

    Ok(())
}

/// Rules command
pub fn cmd_rules<W: Write>(stage: Option<u8>, out: &mut W) -> Result<()> {
    let table = RuleTable::shared()?;

    let mut shown = 0;
    for rule in table.iter().filter(|r| stage.map_or(true, |s| r.stage == s)) {
        writeln!(
            out,
            "{:>4}  {:>2}  {:<13}  {:<32}  {}",
            rule.rule_id,
            rule.stage,
            rule.kind().to_string().cyan(),
            rule.rewrite.source(),
            rule.replacement.green()
        )?;
        shown += 1;
    }

    if shown == 0 {
        bail!("No rules in stage {}", stage.unwrap_or_default());
    }

    Ok(())
}

/// Config command
///
/// Works on the `--config` file when given, otherwise on the default config
/// file, which is created on first change.
pub fn cmd_config<W: Write>(
    config: Option<&Path>,
    set_replace: Option<bool>,
    reset: bool,
    out: &mut W,
) -> Result<()> {
    let path: PathBuf = match config {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };

    if reset {
        let settings = FilterSettings::default();
        save_settings(&settings, &path)?;
        writeln!(out, "{}", "Configuration reset to defaults".green().bold())?;
        return print_settings(&settings, &path, out);
    }

    let mut settings = if path.exists() {
        load_settings(&path)?
    } else {
        FilterSettings::default()
    };

    if let Some(replace) = set_replace {
        settings.replace = replace;
        save_settings(&settings, &path)?;
        writeln!(out, "  Set replace: {}", replace.to_string().green())?;
    }

    print_settings(&settings, &path, out)
}

fn print_settings<W: Write>(settings: &FilterSettings, path: &Path, out: &mut W) -> Result<()> {
    writeln!(out, "  {:>7}: {}", "file", path.display().to_string().cyan())?;
    writeln!(out, "  {:>7}: {}", "replace", settings.replace)?;
    Ok(())
}
