//! Outcome script runner.
//!
//! Validates outcome scripts and replays them through an
//! [`OutcomeSequencer`](outcome_sequencer::core::sequencer::OutcomeSequencer),
//! printing what each call dispenses.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use outcome_sequencer::exit_codes;
use outcome_sequencer::io::config::DEFAULT_CONFIG_PATH;
use outcome_sequencer::logging;
use outcome_sequencer::replay::{render_lines, replay_from_path, validate_from_path};

#[derive(Parser)]
#[command(
    name = "sequencer",
    version,
    about = "Replay ordered call-outcome scripts"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a script against the schema and invariants, and that it can be
    /// replayed under the config's exhaustion default.
    Validate {
        /// Path to the script JSON file.
        script: PathBuf,
        /// Replay config (TOML). Missing file means defaults.
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
    /// Dispense outcomes from a script and print one line per call.
    Replay {
        /// Path to the script JSON file.
        script: PathBuf,
        /// Number of calls (defaults to the script length plus `extra_calls`).
        #[arg(short, long)]
        calls: Option<u32>,
        /// Replay config (TOML). Missing file means defaults.
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Validate { script, config } => cmd_validate(&script, &config),
        Command::Replay {
            script,
            calls,
            config,
            json,
        } => cmd_replay(&script, calls, &config, json),
    }
}

fn cmd_validate(script_path: &Path, config_path: &Path) -> Result<()> {
    let script = validate_from_path(script_path, config_path)?;
    println!("ok {}", script.name);
    Ok(())
}

fn cmd_replay(
    script_path: &Path,
    calls: Option<u32>,
    config_path: &Path,
    json: bool,
) -> Result<()> {
    let report = replay_from_path(script_path, config_path, calls)?;
    if json {
        let payload = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{}", payload);
        return Ok(());
    }
    for line in render_lines(&report) {
        println!("{}", line);
    }
    Ok(())
}
