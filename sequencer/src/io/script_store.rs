//! Outcome script load/save helpers with schema + invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::Draft;
use serde_json::Value;
use tracing::debug;

use crate::core::invariants::validate_invariants;
use crate::script::OutcomeScript;

/// JSON Schema (draft 2020-12) for outcome scripts.
pub const V1_SCHEMA: &str = include_str!("../../../schemas/outcome_script/v1.schema.json");

/// Load and validate a script from disk (schema + invariants).
pub fn load_script(path: &Path) -> Result<OutcomeScript> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read script {}", path.display()))?;
    let script =
        parse_script(&contents).with_context(|| format!("load script {}", path.display()))?;
    debug!(name = %script.name, outcomes = script.outcomes.len(), "loaded script");
    Ok(script)
}

/// Parse and validate a script from JSON text.
pub fn parse_script(raw: &str) -> Result<OutcomeScript> {
    let value: Value = serde_json::from_str(raw).context("parse script json")?;
    validate_schema(&value)?;
    let script: OutcomeScript =
        serde_json::from_value(value).context("deserialize script as v1 struct")?;
    let errors = validate_invariants(&script);
    if !errors.is_empty() {
        return Err(anyhow!("script invariants failed: {}", errors.join("; ")));
    }
    Ok(script)
}

/// Write script to disk as pretty JSON with trailing newline.
pub fn write_script(path: &Path, script: &OutcomeScript) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create script dir {}", parent.display()))?;
    }
    let mut buf = serde_json::to_string_pretty(script).context("serialize script json")?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write script {}", path.display()))
}

fn validate_schema(instance: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(V1_SCHEMA).context("parse script schema")?;
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .context("compile json schema")?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        return Err(anyhow!(
            "script schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}
