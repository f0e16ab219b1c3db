//! I/O helpers for sequencer commands.

pub mod config;
pub mod script_store;
