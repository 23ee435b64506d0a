//! Process model.
//!
//! A process is the unit of work consumed by the simulator: it arrives
//! at a known time, needs a known CPU burst, and — once scheduled —
//! carries the timing metrics derived from its single execution.
//!
//! # Time Representation
//! All times are integers in abstract simulated time units relative to
//! t=0. The consumer defines what one unit means (ms, ticks, seconds).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Created with only `id`, `arrival_time`, and `burst_time` populated;
/// every other field is computed exactly once when the simulator
/// schedules the process, after which the record is read-only.
///
/// # Invariants (hold once `finished` is true)
/// - `completion_time == start_time + burst_time`
/// - `turnaround_time == completion_time - arrival_time`
/// - `waiting_time == turnaround_time - burst_time`
/// - `response_time == start_time - arrival_time`
/// - `start_time >= arrival_time`
///
/// Under non-preemptive single-burst execution, `waiting_time` and
/// `response_time` are always equal. Both fields exist anyway: a
/// preemptive scheduler would differentiate them, and collapsing the
/// two would change the output shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique identifier, assigned 1-based in input order.
    pub id: u32,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// CPU time the process needs once started.
    pub burst_time: i64,
    /// Time the process was dispatched.
    pub start_time: i64,
    /// Time the process finished (`start_time + burst_time`).
    pub completion_time: i64,
    /// Total time from arrival to completion.
    pub turnaround_time: i64,
    /// Time spent eligible but not running.
    pub waiting_time: i64,
    /// Time from arrival to first dispatch.
    pub response_time: i64,
    /// Whether the simulator has scheduled and completed this process.
    pub finished: bool,
}

impl ProcessRecord {
    /// Creates a fresh, unscheduled process record.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            start_time: 0,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
            response_time: 0,
            finished: false,
        }
    }

    /// Whether the process is eligible for dispatch at `now`.
    #[inline]
    pub fn eligible_at(&self, now: i64) -> bool {
        !self.finished && self.arrival_time <= now
    }

    /// Runs the process to completion starting at `start_time`,
    /// deriving every timing field and marking the record finished.
    ///
    /// Callers must ensure `start_time >= self.arrival_time` and that
    /// the record has not been scheduled before; the simulator's
    /// eligibility scan guarantees both.
    pub(crate) fn complete_at(&mut self, start_time: i64) {
        debug_assert!(!self.finished, "process {} scheduled twice", self.id);
        debug_assert!(start_time >= self.arrival_time);

        self.start_time = start_time;
        self.completion_time = start_time + self.burst_time;
        self.turnaround_time = self.completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
        self.response_time = self.start_time - self.arrival_time;
        self.finished = true;
    }
}

/// Builds a batch of fresh process records from `(arrival, burst)`
/// pairs, assigning ids 1-based in input order.
///
/// Input order matters beyond id assignment: equal-burst ties during
/// simulation resolve to the earlier input position.
pub fn batch_from_times(times: &[(i64, i64)]) -> Vec<ProcessRecord> {
    times
        .iter()
        .enumerate()
        .map(|(i, &(arrival, burst))| ProcessRecord::new(i as u32 + 1, arrival, burst))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_zeroed() {
        let p = ProcessRecord::new(1, 4, 7);
        assert_eq!(p.id, 1);
        assert_eq!(p.arrival_time, 4);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.start_time, 0);
        assert_eq!(p.completion_time, 0);
        assert_eq!(p.turnaround_time, 0);
        assert_eq!(p.waiting_time, 0);
        assert_eq!(p.response_time, 0);
        assert!(!p.finished);
    }

    #[test]
    fn test_eligibility() {
        let p = ProcessRecord::new(1, 5, 3);
        assert!(!p.eligible_at(4));
        assert!(p.eligible_at(5));
        assert!(p.eligible_at(100));

        let mut done = ProcessRecord::new(2, 0, 1);
        done.complete_at(0);
        assert!(!done.eligible_at(100));
    }

    #[test]
    fn test_complete_at_derives_all_fields() {
        let mut p = ProcessRecord::new(1, 2, 6);
        p.complete_at(8);

        assert!(p.finished);
        assert_eq!(p.start_time, 8);
        assert_eq!(p.completion_time, 14);
        assert_eq!(p.turnaround_time, 12);
        assert_eq!(p.waiting_time, 6);
        assert_eq!(p.response_time, 6);
        assert_eq!(p.waiting_time, p.response_time);
    }

    #[test]
    fn test_zero_burst_completes_instantly() {
        let mut p = ProcessRecord::new(1, 3, 0);
        p.complete_at(3);
        assert_eq!(p.completion_time, 3);
        assert_eq!(p.turnaround_time, 0);
        assert_eq!(p.waiting_time, 0);
    }

    #[test]
    fn test_batch_ids_follow_input_order() {
        let batch = batch_from_times(&[(0, 6), (1, 4), (2, 2)]);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].id, 1);
        assert_eq!(batch[1].id, 2);
        assert_eq!(batch[2].id, 3);
        assert_eq!(batch[1].arrival_time, 1);
        assert_eq!(batch[1].burst_time, 4);
        assert!(batch.iter().all(|p| !p.finished));
    }

    #[test]
    fn test_serde_round_trip() {
        let p = ProcessRecord::new(3, 1, 9);
        let json = serde_json::to_string(&p).unwrap();
        let back: ProcessRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
