//! Plain-text rendering of simulation results.
//!
//! Pure string builders — the library performs no I/O; callers decide
//! where the text goes. Aggregates are rendered with two decimal
//! places; per-process times are exact integers.

use std::fmt::Write;

use crate::models::ProcessRecord;
use crate::simulator::SimulationSummary;

/// Renders one block per process with its input and computed times.
pub fn render_processes(processes: &[ProcessRecord]) -> String {
    let mut out = String::new();
    for p in processes {
        // Infallible on String; discard the fmt::Result.
        let _ = writeln!(out, "Process {}:", p.id);
        let _ = writeln!(out, "  Arrival time:    {}", p.arrival_time);
        let _ = writeln!(out, "  Burst time:      {}", p.burst_time);
        let _ = writeln!(out, "  Start time:      {}", p.start_time);
        let _ = writeln!(out, "  Completion time: {}", p.completion_time);
        let _ = writeln!(out, "  Turnaround time: {}", p.turnaround_time);
        let _ = writeln!(out, "  Waiting time:    {}", p.waiting_time);
        let _ = writeln!(out, "  Response time:   {}", p.response_time);
        let _ = writeln!(out);
    }
    out
}

/// Renders the aggregate summary block.
///
/// Throughput prints as `undefined` when the arrival-to-completion
/// span is zero.
pub fn render_summary(summary: &SimulationSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Average turnaround time: {:.2}", summary.avg_turnaround);
    let _ = writeln!(out, "Average waiting time:    {:.2}", summary.avg_waiting);
    let _ = writeln!(out, "Average response time:   {:.2}", summary.avg_response);
    let _ = writeln!(out, "CPU utilization:         {:.2}%", summary.cpu_utilization);
    match summary.throughput {
        Some(rate) => {
            let _ = writeln!(out, "Throughput:              {rate:.2}");
        }
        None => {
            let _ = writeln!(out, "Throughput:              undefined");
        }
    }
    out
}
