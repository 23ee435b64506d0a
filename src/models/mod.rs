//! Scheduling domain models.
//!
//! Provides the core data type for the simulation: the
//! [`ProcessRecord`], a single unit of CPU work with its arrival and
//! burst inputs and the timing metrics computed when it runs.
//!
//! # Lifecycle
//!
//! A batch of records is created once (inputs populated, metrics
//! zeroed), mutated exactly once per record by the simulation loop,
//! then handed off read-only for reporting.

mod process;

pub use process::{batch_from_times, ProcessRecord};
