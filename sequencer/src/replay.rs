//! Replay helpers for `sequencer replay`.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::core::error::SequenceError;
use crate::core::outcome::ExhaustionMode;
use crate::core::sequencer::OutcomeSequencer;
use crate::io::config::{ReplayConfig, load_config};
use crate::io::script_store::load_script;
use crate::script::OutcomeScript;

/// What one replayed call produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dispensed {
    Value(Value),
    Fail(String),
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayEntry {
    /// 1-based call index.
    pub call: u32,
    pub dispensed: Dispensed,
}

/// Summary of a replay invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub name: String,
    pub mode: ExhaustionMode,
    pub entries: Vec<ReplayEntry>,
    /// Outcomes left undispensed after the last call.
    pub remaining: usize,
}

/// Build a sequencer for `script`, using the config default when the script
/// does not pick an exhaustion mode.
pub fn build_sequencer(
    script: &OutcomeScript,
    config: &ReplayConfig,
) -> Result<OutcomeSequencer<Value, String>> {
    let mode = script.exhaustion.unwrap_or(config.default_exhaustion);
    OutcomeSequencer::new(script.outcomes.clone(), mode)
        .with_context(|| format!("build sequencer for script '{}'", script.name))
}

/// Dispense `calls` outcomes from `script` and record each one.
///
/// Defaults to every configured outcome plus `config.extra_calls`.
#[instrument(skip_all, fields(script = %script.name))]
pub fn replay_script(
    script: &OutcomeScript,
    config: &ReplayConfig,
    calls: Option<u32>,
) -> Result<ReplayReport> {
    let calls = match calls {
        Some(calls) => calls,
        None => u32::try_from(script.outcomes.len())
            .context("script has too many outcomes")?
            .saturating_add(config.extra_calls),
    };
    if calls > config.max_calls {
        return Err(anyhow!(
            "requested {} calls exceeds max_calls {}",
            calls,
            config.max_calls
        ));
    }

    let mut sequencer = build_sequencer(script, config)?;
    let mut entries = Vec::with_capacity(calls as usize);
    for call in 1..=calls {
        let dispensed = match sequencer.next() {
            Ok(value) => Dispensed::Value(value),
            Err(SequenceError::ConfiguredFailure(message)) => Dispensed::Fail(message),
            Err(SequenceError::Exhausted { .. }) => Dispensed::Exhausted,
        };
        debug!(call, dispensed = ?dispensed, "replayed call");
        entries.push(ReplayEntry { call, dispensed });
    }

    info!(calls, remaining = sequencer.remaining(), "replay finished");
    Ok(ReplayReport {
        name: script.name.clone(),
        mode: sequencer.mode(),
        entries,
        remaining: sequencer.remaining(),
    })
}

/// Load config and script from disk, then replay.
pub fn replay_from_path(
    script_path: &Path,
    config_path: &Path,
    calls: Option<u32>,
) -> Result<ReplayReport> {
    let config = load_config(config_path)
        .with_context(|| format!("load config {}", config_path.display()))?;
    let script = load_script(script_path)?;
    replay_script(&script, &config, calls)
}

/// Load config and script from disk and check that a sequencer can be built,
/// so validation rejects what replay would reject at construction time.
pub fn validate_from_path(script_path: &Path, config_path: &Path) -> Result<OutcomeScript> {
    let config = load_config(config_path)
        .with_context(|| format!("load config {}", config_path.display()))?;
    let script = load_script(script_path)?;
    build_sequencer(&script, &config)?;
    Ok(script)
}

/// Render a report as one line per call.
///
/// Failure messages are JSON-quoted so embedded newlines stay on their line.
pub fn render_lines(report: &ReplayReport) -> Vec<String> {
    report
        .entries
        .iter()
        .map(|entry| match &entry.dispensed {
            Dispensed::Value(value) => format!("{} value {}", entry.call, value),
            Dispensed::Fail(message) => {
                format!("{} fail {}", entry.call, Value::from(message.as_str()))
            }
            Dispensed::Exhausted => format!("{} exhausted", entry.call),
        })
        .collect()
}
