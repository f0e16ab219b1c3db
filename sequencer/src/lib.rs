//! Ordered call-outcome sequencing for test doubles.
//!
//! An [`OutcomeSequencer`](core::sequencer::OutcomeSequencer) is configured with
//! an ordered list of outcomes (a value, an absent value, or a failure) and
//! dispenses one per call. The crate is split into:
//!
//! - **[`core`]**: Pure, deterministic logic (outcomes, sequencing, invariants).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Script and config files on disk.
//!
//! [`service`] shows the sequencer injected behind a capability trait, and
//! [`replay`] drives scripts for the `sequencer` binary.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod replay;
pub mod script;
pub mod service;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
