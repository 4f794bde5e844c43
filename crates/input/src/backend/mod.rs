//! Input-injection backends.
//!
//! `enigo` performs real OS calls; `mock` records events in memory for
//! tests and headless runs.

pub mod enigo;
pub mod mock;
