//! Test-only helpers for building records, scripted services and script files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::error::ConfigurationError;
use crate::core::outcome::{ExhaustionMode, Outcome};
use crate::io::config::{ReplayConfig, write_config};
use crate::io::script_store::write_script;
use crate::script::OutcomeScript;
use crate::service::{LookupOutcome, Record, ScriptedRecordService};

/// Message used by the reference failure outcomes.
pub const FAILURE: &str = "Failure";

/// Create a record with the given id and name.
pub fn record(id: u64, name: &str) -> Record {
    Record {
        id,
        name: name.to_string(),
    }
}

/// The record returned by the reference scenarios (`id=1`, `name="Real"`).
pub fn real_record() -> Record {
    record(1, "Real")
}

/// Lookup outcome returning `record`.
pub fn found(record: Record) -> LookupOutcome {
    Outcome::Value(Some(record))
}

/// Lookup outcome returning an absent record.
pub fn absent() -> LookupOutcome {
    Outcome::Value(None)
}

/// Lookup outcome failing with `message`.
pub fn failing(message: &str) -> LookupOutcome {
    Outcome::Fail(message.to_string())
}

/// Create a scripted service over `lookups`.
pub fn scripted_service(
    lookups: Vec<LookupOutcome>,
    mode: ExhaustionMode,
) -> Result<ScriptedRecordService, ConfigurationError> {
    ScriptedRecordService::new(lookups, mode)
}

/// Value, then absent value.
pub fn value_then_absent() -> Vec<LookupOutcome> {
    vec![found(real_record()), absent()]
}

/// Failure, then value.
pub fn fail_then_value() -> Vec<LookupOutcome> {
    vec![failing(FAILURE), found(real_record())]
}

/// Value, then failure.
pub fn value_then_fail() -> Vec<LookupOutcome> {
    vec![found(real_record()), failing(FAILURE)]
}

/// Temporary directory holding script and config files for a test.
pub struct TestScript {
    _temp: TempDir,
    root: PathBuf,
}

impl TestScript {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("tempdir")?;
        let root = temp.path().to_path_buf();
        Ok(Self { _temp: temp, root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write `script` as `<name>.json` and return its path.
    pub fn write_script(&self, script: &OutcomeScript) -> Result<PathBuf> {
        let path = self.root.join(format!("{}.json", script.name));
        write_script(&path, script)?;
        Ok(path)
    }

    /// Write raw JSON as `<file_name>` and return its path.
    pub fn write_raw(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.root.join(file_name);
        std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Write `config` to the default `.sequencer/config.toml` location.
    pub fn write_config(&self, config: &ReplayConfig) -> Result<PathBuf> {
        let path = self.root.join(crate::io::config::DEFAULT_CONFIG_PATH);
        write_config(&path, config)?;
        Ok(path)
    }
}
