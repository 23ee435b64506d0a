//! Non-preemptive Shortest-Job-First simulator.
//!
//! # Algorithm
//!
//! 1. Scan unfinished processes; among those already arrived, pick the
//!    one with the strictly smallest burst time.
//! 2. If none has arrived yet, advance the clock by one unit (idle).
//! 3. Run the pick to completion, derive its timing metrics, and jump
//!    the clock to its completion time.
//! 4. Repeat until every process has run.
//!
//! # Complexity
//! O(n) per decision and per idle tick, O(n^2 + T) overall where T is
//! the final completion time. Fine for batch sizes this model targets;
//! a min-heap keyed by burst would be the upgrade path for large n.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use crate::models::ProcessRecord;
use crate::simulator::SimulationSummary;

/// Non-preemptive Shortest-Job-First scheduler over a fixed batch.
///
/// The batch is static: every arrival and burst is known before the
/// simulation starts, and once a process is dispatched it runs its
/// whole burst uninterrupted.
///
/// # Example
///
/// ```
/// use sjf_sim::models::batch_from_times;
/// use sjf_sim::simulator::SjfSimulator;
///
/// let mut batch = batch_from_times(&[(0, 6), (1, 4), (2, 2)]);
/// let summary = SjfSimulator::new().run(&mut batch);
///
/// // P3 (burst 2) overtakes P2 (burst 4) once P1 finishes at t=6.
/// assert_eq!(batch[2].start_time, 6);
/// assert_eq!(batch[1].start_time, 8);
/// assert_eq!(summary.total_idle, 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfSimulator;

impl SjfSimulator {
    /// Creates a new simulator.
    pub fn new() -> Self {
        Self
    }

    /// Runs the batch to completion, mutating each record in place
    /// exactly once, and returns the aggregate summary.
    ///
    /// Preconditions (see [`crate::validation::validate_batch`]):
    /// every record fresh, all times non-negative. An empty batch
    /// yields an empty summary.
    pub fn run(&self, processes: &mut [ProcessRecord]) -> SimulationSummary {
        let mut current_time: i64 = 0;
        // End of the previously dispatched burst; gaps against it are idle time.
        let mut prev_time: i64 = 0;
        let mut total_idle: i64 = 0;
        let mut completed = 0;

        while completed < processes.len() {
            // Strict `<` keeps the first (lowest-index) process on
            // equal bursts, which fixes the order of equal-length jobs.
            let mut min_burst = i64::MAX;
            let mut selected = None;
            for (index, p) in processes.iter().enumerate() {
                if !p.eligible_at(current_time) || p.burst_time >= min_burst {
                    continue;
                }
                min_burst = p.burst_time;
                selected = Some(index);
            }

            let Some(index) = selected else {
                // Nothing has arrived yet: idle one unit and rescan.
                current_time += 1;
                continue;
            };

            let p = &mut processes[index];
            p.complete_at(current_time);
            total_idle += p.start_time - prev_time;

            current_time = p.completion_time;
            prev_time = current_time;
            completed += 1;
        }

        SimulationSummary::calculate(processes, total_idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::batch_from_times;

    const EPS: f64 = 1e-10;

    fn run(times: &[(i64, i64)]) -> (Vec<ProcessRecord>, SimulationSummary) {
        let mut batch = batch_from_times(times);
        let summary = SjfSimulator::new().run(&mut batch);
        (batch, summary)
    }

    #[test]
    fn test_single_process() {
        let (batch, summary) = run(&[(0, 5)]);
        let p = &batch[0];
        assert_eq!(p.start_time, 0);
        assert_eq!(p.completion_time, 5);
        assert_eq!(p.turnaround_time, 5);
        assert_eq!(p.waiting_time, 0);
        assert_eq!(p.response_time, 0);

        assert!((summary.avg_turnaround - 5.0).abs() < EPS);
        assert!((summary.cpu_utilization - 100.0).abs() < EPS);
        assert!((summary.throughput.unwrap() - 0.2).abs() < EPS);
    }

    #[test]
    fn test_shortest_burst_overtakes() {
        // P1 is alone at t=0 and runs 0..6; at t=6 both P2 and P3 wait,
        // P3 (burst 2) wins, then P2 runs 8..12.
        let (batch, summary) = run(&[(0, 6), (1, 4), (2, 2)]);

        assert_eq!(batch[0].start_time, 0);
        assert_eq!(batch[2].start_time, 6);
        assert_eq!(batch[2].completion_time, 8);
        assert_eq!(batch[1].start_time, 8);
        assert_eq!(batch[1].completion_time, 12);

        assert_eq!(batch[0].waiting_time, 0);
        assert_eq!(batch[2].waiting_time, 4);
        assert_eq!(batch[1].waiting_time, 7);

        assert_eq!(summary.total_idle, 0);
        assert!((summary.cpu_utilization - 100.0).abs() < EPS);
        assert!((summary.avg_turnaround - 23.0 / 3.0).abs() < EPS);
        assert!((summary.avg_waiting - 11.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_idle_gap_accounted() {
        // P1 runs 0..2, CPU idles 2..5, P2 runs 5..8.
        let (batch, summary) = run(&[(0, 2), (5, 3)]);

        assert_eq!(batch[0].completion_time, 2);
        assert_eq!(batch[1].start_time, 5);
        assert_eq!(batch[1].waiting_time, 0);

        assert_eq!(summary.total_idle, 3);
        assert_eq!(summary.makespan, 8);
        assert!((summary.cpu_utilization - 62.5).abs() < EPS);
        assert!((summary.throughput.unwrap() - 0.25).abs() < EPS);
    }

    #[test]
    fn test_leading_idle_before_first_arrival() {
        let (batch, summary) = run(&[(4, 2)]);
        assert_eq!(batch[0].start_time, 4);
        assert_eq!(summary.total_idle, 4);
        assert_eq!(summary.makespan, 6);
        // Busy 2 of 6 units.
        assert!((summary.cpu_utilization - 100.0 * 2.0 / 6.0).abs() < EPS);
    }

    #[test]
    fn test_tie_break_prefers_lower_id() {
        // Identical arrival and burst: input order decides.
        let (batch, _) = run(&[(0, 3), (0, 3), (0, 3)]);
        assert_eq!(batch[0].start_time, 0);
        assert_eq!(batch[1].start_time, 3);
        assert_eq!(batch[2].start_time, 6);
    }

    #[test]
    fn test_tie_break_among_late_arrivals() {
        // At t=5 both P2 and P3 are waiting with burst 2; P2 (lower id) first.
        let (batch, _) = run(&[(0, 5), (1, 2), (2, 2)]);
        assert_eq!(batch[1].start_time, 5);
        assert_eq!(batch[2].start_time, 7);
    }

    #[test]
    fn test_every_process_finishes_once() {
        let (batch, _) = run(&[(3, 4), (0, 9), (2, 1), (7, 0), (7, 5)]);
        assert!(batch.iter().all(|p| p.finished));

        for p in &batch {
            assert_eq!(p.completion_time, p.start_time + p.burst_time);
            assert_eq!(p.turnaround_time, p.completion_time - p.arrival_time);
            assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
            assert_eq!(p.response_time, p.start_time - p.arrival_time);
            assert!(p.start_time >= p.arrival_time);
        }
    }

    #[test]
    fn test_zero_burst_runs_uniformly() {
        let (batch, summary) = run(&[(0, 0), (0, 4)]);
        // Burst 0 is the strict minimum, so P1 "runs" first at t=0.
        assert_eq!(batch[0].start_time, 0);
        assert_eq!(batch[0].completion_time, 0);
        assert_eq!(batch[1].start_time, 0);
        assert_eq!(summary.makespan, 4);
    }

    #[test]
    fn test_all_zero_burst_throughput_undefined() {
        let (batch, summary) = run(&[(0, 0), (0, 0)]);
        assert!(batch.iter().all(|p| p.finished));
        assert_eq!(summary.makespan, 0);
        assert_eq!(summary.throughput, None);
    }

    #[test]
    fn test_empty_batch() {
        let (_, summary) = run(&[]);
        assert_eq!(summary.makespan, 0);
        assert_eq!(summary.throughput, None);
    }

    #[test]
    fn test_busy_plus_idle_covers_makespan() {
        let (batch, summary) = run(&[(2, 3), (10, 1), (4, 6)]);
        let total_burst: i64 = batch.iter().map(|p| p.burst_time).sum();
        assert_eq!(summary.makespan - summary.total_idle, total_burst);
    }
}
