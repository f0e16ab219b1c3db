//! Replay configuration stored under `.sequencer/config.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::outcome::ExhaustionMode;

/// Default config location relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".sequencer/config.toml";

/// Replay configuration (TOML).
///
/// Missing fields default to the values in [`ReplayConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReplayConfig {
    /// Exhaustion mode for scripts that do not set their own.
    pub default_exhaustion: ExhaustionMode,

    /// Calls to make past the end of a script when no call count is given.
    pub extra_calls: u32,

    /// Upper bound on calls per replay.
    pub max_calls: u32,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            default_exhaustion: ExhaustionMode::FailClosed,
            extra_calls: 1,
            max_calls: 1_000,
        }
    }
}

impl ReplayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_calls == 0 {
            return Err(anyhow!("max_calls must be > 0"));
        }
        if self.extra_calls > self.max_calls {
            return Err(anyhow!(
                "extra_calls {} exceeds max_calls {}",
                self.extra_calls,
                self.max_calls
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ReplayConfig::default()`.
pub fn load_config(path: &Path) -> Result<ReplayConfig> {
    if !path.exists() {
        let cfg = ReplayConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ReplayConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ReplayConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
