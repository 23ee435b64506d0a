//! Input validation for process batches.
//!
//! Checks the simulator's preconditions before a batch is handed to
//! [`SjfSimulator::run`](crate::simulator::SjfSimulator::run). Detects:
//! - Empty batches
//! - Negative arrival or burst times
//! - Duplicate process IDs
//! - Records that were already scheduled
//!
//! The simulator itself assumes these preconditions hold; the caller
//! runs this check once, where an interactive front end would sit.

use crate::models::ProcessRecord;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The batch contains no processes.
    EmptyBatch,
    /// An arrival or burst time is negative.
    NegativeTime,
    /// Two processes share the same ID.
    DuplicateId,
    /// A record is already marked finished or carries nonzero metrics.
    AlreadyScheduled,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a batch of process records before simulation.
///
/// Checks:
/// 1. At least one process
/// 2. All arrival and burst times non-negative
/// 3. No duplicate process IDs
/// 4. Every record fresh (`finished == false`, metrics zeroed)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[ProcessRecord]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyBatch,
            "Batch must contain at least one process",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeTime,
                format!("Process {} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }
        if p.burst_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeTime,
                format!("Process {} has negative burst time {}", p.id, p.burst_time),
            ));
        }

        let metrics_zeroed = p.start_time == 0
            && p.completion_time == 0
            && p.turnaround_time == 0
            && p.waiting_time == 0
            && p.response_time == 0;
        if p.finished || !metrics_zeroed {
            errors.push(ValidationError::new(
                ValidationErrorKind::AlreadyScheduled,
                format!("Process {} has already been scheduled", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
