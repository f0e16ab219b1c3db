//! Record service seam and its scripted test double.
//!
//! [`RecordService`] is the capability a caller depends on. Tests inject a
//! [`ScriptedRecordService`] whose lookups are answered by an
//! [`OutcomeSequencer`], so each call can return a record, an absent value or a
//! failure in a predetermined order.

use std::cell::RefCell;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::core::error::{ConfigurationError, SequenceError};
use crate::core::outcome::{ExhaustionMode, Outcome};
use crate::core::sequencer::OutcomeSequencer;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub name: String,
}

/// Abstraction over record storage backends.
pub trait RecordService {
    /// Look up a record by id. `Ok(None)` means no record exists.
    fn find_record(&self, id: u64) -> Result<Option<Record>>;

    fn save_record(&self, record: &Record) -> Result<()>;
}

/// Outcome dispensed for one `find_record` call.
pub type LookupOutcome = Outcome<Option<Record>, String>;

/// Record service whose lookups replay a predetermined outcome sequence.
///
/// Failures surface as [`SequenceError<String>`] inside the returned
/// `anyhow::Error`, unchanged.
pub struct ScriptedRecordService {
    lookups: RefCell<OutcomeSequencer<Option<Record>, String>>,
    saved: RefCell<Vec<Record>>,
}

impl ScriptedRecordService {
    pub fn new(
        lookups: Vec<LookupOutcome>,
        mode: ExhaustionMode,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::from_sequencer(OutcomeSequencer::new(lookups, mode)?))
    }

    pub fn from_sequencer(lookups: OutcomeSequencer<Option<Record>, String>) -> Self {
        Self {
            lookups: RefCell::new(lookups),
            saved: RefCell::new(Vec::new()),
        }
    }

    /// Lookup outcomes not yet dispensed.
    pub fn remaining(&self) -> usize {
        self.lookups.borrow().remaining()
    }

    /// Restart the lookup sequence.
    pub fn reset(&self) {
        self.lookups.borrow_mut().reset();
    }

    /// Records passed to `save_record`, in call order.
    pub fn saved(&self) -> Vec<Record> {
        self.saved.borrow().clone()
    }
}

impl RecordService for ScriptedRecordService {
    fn find_record(&self, id: u64) -> Result<Option<Record>> {
        let mut lookups = self.lookups.borrow_mut();
        let call = lookups.cursor();
        let result = lookups.next();
        debug!(id, call, ok = result.is_ok(), "scripted lookup");
        Ok(result?)
    }

    fn save_record(&self, record: &Record) -> Result<()> {
        self.saved.borrow_mut().push(record.clone());
        Ok(())
    }
}

/// Look up a record and return its name. Service errors propagate unchanged.
pub fn record_name<S: RecordService>(service: &S, id: u64) -> Result<Option<String>> {
    let record = service.find_record(id)?;
    Ok(record.map(|record| record.name))
}

/// Look up a record, retrying configured failures up to `max_attempts` calls.
///
/// An exhausted sequence is returned immediately. Retry policy belongs to the
/// caller; the sequencer never retries on its own.
#[instrument(skip(service))]
pub fn find_with_retry<S: RecordService>(
    service: &S,
    id: u64,
    max_attempts: u32,
) -> Result<Option<Record>> {
    if max_attempts == 0 {
        return Err(anyhow!("max_attempts must be > 0"));
    }
    let mut attempt = 1;
    loop {
        match service.find_record(id) {
            Ok(record) => return Ok(record),
            Err(err) => {
                let exhausted = err
                    .downcast_ref::<SequenceError<String>>()
                    .is_some_and(SequenceError::is_exhausted);
                if exhausted || attempt >= max_attempts {
                    return Err(err);
                }
                warn!(attempt, max_attempts, error = %err, "lookup failed, retrying");
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real() -> Record {
        Record {
            id: 1,
            name: "Real".to_string(),
        }
    }

    #[test]
    fn find_record_forwards_sequence_in_order() {
        let service = ScriptedRecordService::new(
            vec![Outcome::Value(Some(real())), Outcome::Value(None)],
            ExhaustionMode::FailClosed,
        )
        .expect("service");

        assert_eq!(service.find_record(1).expect("first"), Some(real()));
        assert_eq!(service.find_record(1).expect("second"), None);
        assert_eq!(service.remaining(), 0);
    }

    #[test]
    fn configured_failure_keeps_message_and_type() {
        let service = ScriptedRecordService::new(
            vec![Outcome::Fail("Failure".to_string())],
            ExhaustionMode::FailClosed,
        )
        .expect("service");

        let err = service.find_record(1).unwrap_err();
        assert_eq!(err.to_string(), "Failure");
        assert_eq!(
            err.downcast_ref::<SequenceError<String>>(),
            Some(&SequenceError::ConfiguredFailure("Failure".to_string()))
        );
    }

    #[test]
    fn reset_restarts_lookups() {
        let service = ScriptedRecordService::new(
            vec![Outcome::Value(Some(real()))],
            ExhaustionMode::FailClosed,
        )
        .expect("service");

        service.find_record(1).expect("first");
        assert!(service.find_record(1).is_err());
        service.reset();
        assert_eq!(service.find_record(1).expect("after reset"), Some(real()));
    }

    #[test]
    fn save_record_is_logged_without_consuming_lookups() {
        let service =
            ScriptedRecordService::new(vec![Outcome::Value(None)], ExhaustionMode::RepeatLast)
                .expect("service");

        service.save_record(&real()).expect("save");
        assert_eq!(service.saved(), vec![real()]);
        assert_eq!(service.remaining(), 1);
    }

    #[test]
    fn record_name_maps_absent_to_none() {
        let service =
            ScriptedRecordService::new(vec![Outcome::Value(None)], ExhaustionMode::FailClosed)
                .expect("service");
        assert_eq!(record_name(&service, 1).expect("name"), None);
    }

    #[test]
    fn retry_recovers_after_configured_failures() {
        let service = ScriptedRecordService::new(
            vec![
                Outcome::Fail("Failure".to_string()),
                Outcome::Fail("Failure".to_string()),
                Outcome::Value(Some(real())),
            ],
            ExhaustionMode::FailClosed,
        )
        .expect("service");

        let record = find_with_retry(&service, 1, 3).expect("retry");
        assert_eq!(record, Some(real()));
    }

    #[test]
    fn retry_gives_up_after_max_attempts() {
        let service = ScriptedRecordService::new(
            vec![Outcome::Fail("Failure".to_string())],
            ExhaustionMode::RepeatLast,
        )
        .expect("service");

        let err = find_with_retry(&service, 1, 2).unwrap_err();
        assert_eq!(err.to_string(), "Failure");
    }

    #[test]
    fn retry_does_not_retry_exhaustion() {
        let service =
            ScriptedRecordService::new(Vec::new(), ExhaustionMode::FailClosed).expect("service");

        let err = find_with_retry(&service, 1, 5).unwrap_err();
        let seq_err = err.downcast_ref::<SequenceError<String>>().expect("typed");
        assert!(seq_err.is_exhausted());
    }

    #[test]
    fn retry_rejects_zero_attempts() {
        let service =
            ScriptedRecordService::new(vec![Outcome::Value(None)], ExhaustionMode::FailClosed)
                .expect("service");
        assert!(find_with_retry(&service, 1, 0).is_err());
    }
}
