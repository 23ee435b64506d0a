//! Non-preemptive Shortest-Job-First CPU scheduling simulator.
//!
//! Replays a fixed, fully known batch of processes on a single
//! simulated CPU: whenever the CPU is free, the eligible process with
//! the shortest burst runs to completion. The simulator annotates each
//! process with its start, completion, turnaround, waiting, and
//! response times and reports aggregate KPIs (average times, CPU
//! utilization, throughput).
//!
//! The simulation is a closed-form deterministic function of its
//! input: no wall clock, no randomness, no I/O.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`ProcessRecord`] and batch construction
//! - **`simulator`**: The SJF loop and the [`SimulationSummary`] KPIs
//! - **`validation`**: Precondition checks for incoming batches
//! - **`report`**: Plain-text rendering of results
//! - **`generator`**: Random workload construction for tests and experiments
//!
//! # Example
//!
//! ```
//! use sjf_sim::models::batch_from_times;
//! use sjf_sim::simulator::SjfSimulator;
//! use sjf_sim::validation::validate_batch;
//!
//! let mut batch = batch_from_times(&[(0, 2), (5, 3)]);
//! validate_batch(&batch).expect("fresh, non-negative batch");
//!
//! let summary = SjfSimulator::new().run(&mut batch);
//! assert_eq!(summary.total_idle, 3); // CPU idles between t=2 and t=5
//! assert!((summary.cpu_utilization - 62.5).abs() < 1e-10);
//! ```
//!
//! # Reference
//!
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts",
//! Ch. 5: CPU Scheduling

pub mod generator;
pub mod models;
pub mod report;
pub mod simulator;
pub mod validation;

pub use models::{batch_from_times, ProcessRecord};
pub use simulator::{SimulationSummary, SjfSimulator};
