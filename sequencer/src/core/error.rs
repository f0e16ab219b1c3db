//! Error taxonomy for outcome sequencing.

use thiserror::Error;

/// Failure surfaced by [`OutcomeSequencer::next`](crate::core::sequencer::OutcomeSequencer::next).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError<E> {
    /// The outcome configured for this call is a failure. Displayed verbatim.
    #[error("{0}")]
    ConfiguredFailure(E),

    /// Every outcome has been dispensed and the sequencer fails closed.
    #[error("outcome sequence exhausted after {dispensed} outcomes")]
    Exhausted { dispensed: usize },
}

impl<E> SequenceError<E> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, SequenceError::Exhausted { .. })
    }
}

/// Invalid mode/outcome combination detected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("repeat_last exhaustion requires at least one outcome")]
    RepeatLastWithoutOutcomes,
}
