//! Semantic invariants not expressible via JSON Schema.

use crate::core::outcome::ExhaustionMode;
use crate::script::{OutcomeScript, SCRIPT_VERSION};

/// Check semantic invariants of an outcome script:
/// - `version` is supported
/// - `name` is not blank
/// - `repeat_last` has at least one outcome to repeat
pub fn validate_invariants(script: &OutcomeScript) -> Vec<String> {
    let mut errors = Vec::new();

    if script.version != SCRIPT_VERSION {
        errors.push(format!(
            "unsupported version {} (expected {})",
            script.version, SCRIPT_VERSION
        ));
    }

    if script.name.trim().is_empty() {
        errors.push("name must not be blank".to_string());
    }

    if script.exhaustion == Some(ExhaustionMode::RepeatLast) && script.outcomes.is_empty() {
        errors.push(format!(
            "{}: repeat_last requires at least one outcome",
            script.name
        ));
    }

    errors
}
