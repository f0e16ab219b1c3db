//! Ordered call-outcome sequencer.
//!
//! A sequencer is built with a complete, ordered list of outcomes and dispenses
//! one per call to [`OutcomeSequencer::next`]. Once the list is spent, the
//! configured [`ExhaustionMode`] decides what every further call produces.
//!
//! The sequencer holds no lock. Callers that dispense from several threads
//! must wrap it in their own mutual exclusion.

use crate::core::error::{ConfigurationError, SequenceError};
use crate::core::outcome::{ExhaustionMode, Outcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeSequencer<T, E> {
    outcomes: Vec<Outcome<T, E>>,
    cursor: usize,
    mode: ExhaustionMode,
}

impl<T: Clone, E: Clone> OutcomeSequencer<T, E> {
    /// Build a sequencer over `outcomes` (dispense order = insertion order).
    ///
    /// An empty list is accepted except under [`ExhaustionMode::RepeatLast`],
    /// which has nothing to repeat and is rejected here rather than on first use.
    pub fn new(
        outcomes: Vec<Outcome<T, E>>,
        mode: ExhaustionMode,
    ) -> Result<Self, ConfigurationError> {
        if mode == ExhaustionMode::RepeatLast && outcomes.is_empty() {
            return Err(ConfigurationError::RepeatLastWithoutOutcomes);
        }
        Ok(Self {
            outcomes,
            cursor: 0,
            mode,
        })
    }

    /// Dispense the outcome for this call and advance the cursor.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<T, SequenceError<E>> {
        let outcome = match self.outcomes.get(self.cursor) {
            Some(outcome) => {
                self.cursor += 1;
                outcome
            }
            None => match (self.mode, self.outcomes.last()) {
                (ExhaustionMode::RepeatLast, Some(last)) => last,
                _ => {
                    return Err(SequenceError::Exhausted {
                        dispensed: self.outcomes.len(),
                    });
                }
            },
        };
        outcome
            .clone()
            .into_result()
            .map_err(SequenceError::ConfiguredFailure)
    }
}

impl<T, E> OutcomeSequencer<T, E> {
    /// Restart the configured sequence from the first outcome.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Outcomes left before exhaustion.
    pub fn remaining(&self) -> usize {
        self.outcomes.len().saturating_sub(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn mode(&self) -> ExhaustionMode {
        self.mode
    }

    pub fn outcomes(&self) -> &[Outcome<T, E>] {
        &self.outcomes
    }
}
