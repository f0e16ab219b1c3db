//! Outcome values dispensed by a sequencer.

use serde::{Deserialize, Serialize};

/// What a single invocation should produce.
///
/// An absent payload is expressed as `Value(None)` with `T = Option<_>`, which
/// is distinct from "no outcome configured" (an exhausted sequencer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T, E> {
    /// The invocation succeeds with this payload.
    Value(T),
    /// The invocation fails with this error.
    Fail(E),
}

impl<T, E> Outcome<T, E> {
    /// Convert into the result the invocation surfaces.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Fail(err) => Err(err),
        }
    }
}

/// Policy applied once every configured outcome has been dispensed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionMode {
    /// Re-dispense the last configured outcome indefinitely.
    RepeatLast,
    /// Fail every call past the end with an exhausted error.
    #[default]
    FailClosed,
}
