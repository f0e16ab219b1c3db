//! Deterministic, pure logic shared by the sequencer crate.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod error;
pub mod invariants;
pub mod outcome;
pub mod sequencer;
