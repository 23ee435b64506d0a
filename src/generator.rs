//! Random workload construction.
//!
//! Builds batches of fresh process records with uniformly drawn
//! arrival and burst times, for property tests and scheduling
//! experiments. Deterministic under a seeded rng.

use rand::Rng;

use crate::models::ProcessRecord;

/// Specification for a randomly generated process batch.
#[derive(Debug, Clone)]
pub struct WorkloadSpec {
    /// Number of processes to generate.
    pub count: usize,
    /// Inclusive upper bound on arrival times.
    pub max_arrival: i64,
    /// Inclusive upper bound on burst times.
    pub max_burst: i64,
}

impl WorkloadSpec {
    /// Creates a spec with default bounds (arrivals 0..=20, bursts 0..=10).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            max_burst: 10,
        }
    }

    /// Sets the inclusive arrival-time bound.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst-time bound.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Generates a batch of fresh records, ids 1-based in draw order.
    pub fn generate(&self, rng: &mut impl Rng) -> Vec<ProcessRecord> {
        (0..self.count)
            .map(|i| {
                ProcessRecord::new(
                    i as u32 + 1,
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(0..=self.max_burst),
                )
            })
            .collect()
    }
}
