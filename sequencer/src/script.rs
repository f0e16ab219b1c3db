use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::outcome::{ExhaustionMode, Outcome};

/// Current on-disk script format version.
pub const SCRIPT_VERSION: u32 = 1;

/// A named, ordered list of outcomes stored as JSON.
///
/// Payloads are arbitrary JSON (`null` is an absent value); failures carry a
/// message string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeScript {
    pub version: u32,
    pub name: String,
    /// Overrides the configured default exhaustion mode when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exhaustion: Option<ExhaustionMode>,
    pub outcomes: Vec<Outcome<Value, String>>,
}

impl OutcomeScript {
    pub fn new(name: &str, outcomes: Vec<Outcome<Value, String>>) -> Self {
        Self {
            version: SCRIPT_VERSION,
            name: name.to_string(),
            exhaustion: None,
            outcomes,
        }
    }

    pub fn with_exhaustion(mut self, mode: ExhaustionMode) -> Self {
        self.exhaustion = Some(mode);
        self
    }
}
