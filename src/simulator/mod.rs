//! SJF simulation and KPI evaluation.
//!
//! Provides the non-preemptive Shortest-Job-First simulator and the
//! aggregate performance summary computed from a completed batch.
//!
//! # Algorithm
//!
//! [`SjfSimulator`] replays a fixed batch on a single CPU in discrete
//! time: at each decision point it dispatches the eligible process
//! with the shortest burst, running it uninterrupted to completion.
//!
//! # KPI
//!
//! [`SimulationSummary`] computes average turnaround, waiting, and
//! response times plus CPU utilization and throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod sjf;
mod summary;

pub use sjf::SjfSimulator;
pub use summary::SimulationSummary;
