//! Diagnostic tracing for the `sequencer` binary.
//!
//! # Output channels
//!
//! - **stdout**: the replay report (`<call> value|fail|exhausted` lines or the
//!   `--json` report) and `validate` results. Scripts and tests parse it, so
//!   nothing else is written there.
//!
//! - **stderr (this module)**: `tracing` events from the service, replay and
//!   script loading layers, filtered by `RUST_LOG`. Command errors are also
//!   printed to stderr by `main`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. Call once, before any command runs.
///
/// Filter comes from `RUST_LOG` and falls back to `warn`, so a plain replay
/// prints only the report. Per-call `debug!` events from `replay` show up at
/// `outcome_sequencer=debug`.
///
/// # Example
/// ```bash
/// RUST_LOG=outcome_sequencer=debug cargo run -- replay script.json
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
