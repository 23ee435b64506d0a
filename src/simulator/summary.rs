//! Simulation performance summary (KPIs).
//!
//! Computes aggregate scheduling indicators from a completed batch.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Waiting | Mean time spent eligible but not running |
//! | Avg Response | Mean time from arrival to first dispatch |
//! | CPU Utilization | Busy fraction of elapsed time, percent |
//! | Throughput | Processes completed per unit time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::ProcessRecord;

/// Aggregate performance indicators for a completed simulation.
///
/// Per-process metrics are integers; the aggregates are floating-point
/// divisions of the integer sums, unrounded. Display precision is the
/// reporting layer's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Mean turnaround time across the batch.
    pub avg_turnaround: f64,
    /// Mean waiting time across the batch.
    pub avg_waiting: f64,
    /// Mean response time across the batch.
    pub avg_response: f64,
    /// Percentage of elapsed time the CPU was busy (0.0..=100.0).
    ///
    /// When the batch completes at t=0 (every process has zero arrival
    /// and zero burst) no time elapses and no idling occurs, so this
    /// reports 100.0.
    pub cpu_utilization: f64,
    /// Processes completed per unit time over the span from earliest
    /// arrival to latest completion.
    ///
    /// `None` when that span is zero (an all-zero-burst batch), where
    /// the rate is undefined; no infinity or NaN is ever produced.
    pub throughput: Option<f64>,
    /// Latest completion time in the batch.
    pub makespan: i64,
    /// Total time the CPU spent idle, including any leading idle
    /// before the first arrival.
    pub total_idle: i64,
}

impl SimulationSummary {
    /// Computes the summary from a completed batch.
    ///
    /// # Arguments
    /// * `processes` - Records with all timing fields populated.
    /// * `total_idle` - Idle time accumulated by the simulation loop.
    pub fn calculate(processes: &[ProcessRecord], total_idle: i64) -> Self {
        let n = processes.len();

        let mut total_turnaround: i64 = 0;
        let mut total_waiting: i64 = 0;
        let mut total_response: i64 = 0;
        let mut min_arrival = i64::MAX;
        let mut max_completion: i64 = 0;

        for p in processes {
            total_turnaround += p.turnaround_time;
            total_waiting += p.waiting_time;
            total_response += p.response_time;
            min_arrival = min_arrival.min(p.arrival_time);
            max_completion = max_completion.max(p.completion_time);
        }

        let (avg_turnaround, avg_waiting, avg_response) = if n == 0 {
            (0.0, 0.0, 0.0)
        } else {
            (
                total_turnaround as f64 / n as f64,
                total_waiting as f64 / n as f64,
                total_response as f64 / n as f64,
            )
        };

        let cpu_utilization = if max_completion == 0 {
            100.0
        } else {
            (max_completion - total_idle) as f64 / max_completion as f64 * 100.0
        };

        let span = if n == 0 { 0 } else { max_completion - min_arrival };
        let throughput = if span == 0 {
            None
        } else {
            Some(n as f64 / span as f64)
        };

        Self {
            avg_turnaround,
            avg_waiting,
            avg_response,
            cpu_utilization,
            throughput,
            makespan: max_completion,
            total_idle,
        }
    }
}
