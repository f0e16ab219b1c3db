//! Scenario tests for scripted record lookups.
//!
//! Each test builds a fresh scripted service for one scenario and drives it
//! through the `RecordService` seam, the way a caller under test would.

use outcome_sequencer::core::error::{ConfigurationError, SequenceError};
use outcome_sequencer::core::outcome::ExhaustionMode;
use outcome_sequencer::service::{RecordService, find_with_retry, record_name};
use outcome_sequencer::test_support::{
    FAILURE, absent, fail_then_value, failing, found, real_record, record, scripted_service,
    value_then_absent, value_then_fail,
};

fn sequence_error(err: &anyhow::Error) -> &SequenceError<String> {
    err.downcast_ref::<SequenceError<String>>()
        .expect("sequence error")
}

/// Value, then absent value, then exhaustion under fail-closed.
#[test]
fn value_then_absent_then_exhausted() {
    let service =
        scripted_service(value_then_absent(), ExhaustionMode::FailClosed).expect("service");

    let first = service.find_record(1).expect("first call");
    assert_eq!(first, Some(real_record()));

    let second = service.find_record(1).expect("second call");
    assert_eq!(second, None);

    let err = service.find_record(1).unwrap_err();
    assert_eq!(
        sequence_error(&err),
        &SequenceError::Exhausted { dispensed: 2 }
    );
}

/// Failure first, then the record.
#[test]
fn fail_then_succeed() {
    let service = scripted_service(fail_then_value(), ExhaustionMode::FailClosed).expect("service");

    let err = service.find_record(1).unwrap_err();
    assert_eq!(err.to_string(), FAILURE);

    let record = service.find_record(1).expect("second call").expect("record");
    assert_eq!(record.name, "Real");
}

/// Record first, then failure.
#[test]
fn succeed_then_fail() {
    let service = scripted_service(value_then_fail(), ExhaustionMode::FailClosed).expect("service");

    assert_eq!(
        record_name(&service, 1).expect("first call"),
        Some("Real".to_string())
    );

    let err = record_name(&service, 1).unwrap_err();
    assert_eq!(err.to_string(), FAILURE);
    assert_eq!(
        sequence_error(&err),
        &SequenceError::ConfiguredFailure(FAILURE.to_string())
    );
}

/// "Throws once, then always succeeds" under repeat-last.
#[test]
fn fail_once_then_always_succeed() {
    let service = scripted_service(fail_then_value(), ExhaustionMode::RepeatLast).expect("service");

    assert!(service.find_record(1).is_err());
    for _ in 0..3 {
        assert_eq!(service.find_record(1).expect("call"), Some(real_record()));
    }
}

#[test]
fn repeat_last_with_single_failure_always_fails() {
    let service =
        scripted_service(vec![failing("x")], ExhaustionMode::RepeatLast).expect("service");

    for _ in 0..3 {
        let err = service.find_record(1).unwrap_err();
        assert_eq!(err.to_string(), "x");
    }
}

#[test]
fn repeat_last_without_outcomes_is_rejected_before_any_call() {
    let err = scripted_service(Vec::new(), ExhaustionMode::RepeatLast)
        .err()
        .expect("configuration error");
    assert_eq!(err, ConfigurationError::RepeatLastWithoutOutcomes);
}

#[test]
fn reset_reproduces_scenario_from_midway() {
    let service = scripted_service(
        vec![found(record(1, "Real")), absent(), found(record(2, "Other"))],
        ExhaustionMode::FailClosed,
    )
    .expect("service");

    service.find_record(1).expect("first");
    service.reset();

    assert_eq!(service.remaining(), 3);
    assert_eq!(service.find_record(1).expect("first"), Some(record(1, "Real")));
    assert_eq!(service.find_record(1).expect("second"), None);
    assert_eq!(service.find_record(2).expect("third"), Some(record(2, "Other")));
    assert_eq!(service.remaining(), 0);
}

#[test]
fn caller_retry_absorbs_leading_failure() {
    let service = scripted_service(fail_then_value(), ExhaustionMode::FailClosed).expect("service");

    let record = find_with_retry(&service, 1, 2).expect("retry");
    assert_eq!(record, Some(real_record()));
    assert_eq!(service.remaining(), 0);
}
