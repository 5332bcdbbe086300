//! Plain-text rendering of processes, run results and Gantt charts.
//!
//! All renderers return `String`s; printing is up to the caller.

use std::fmt::Write;

use crate::models::{CompletedProcess, Process, RunResult, Timeline};
use crate::scheduler::RunMetrics;

const COL: usize = 5;

/// Gantt bars use two columns per time unit, up to this many per slice.
const MAX_SLICE_WIDTH: usize = 60;

/// Listing of registry records: PID AT BT PR.
pub fn registry_table(processes: &[Process]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(40));
    let _ = writeln!(out, "{:>COL$}{:>COL$}{:>COL$}{:>COL$}", "PID", "AT", "BT", "PR");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for p in processes {
        let _ = writeln!(
            out,
            "{:>COL$}{:>COL$}{:>COL$}{:>COL$}",
            p.id, p.arrival_time, p.burst_time, p.priority
        );
    }
    let _ = writeln!(out, "{}", "=".repeat(40));
    out
}

/// Result table: PID AT BT PR CT WT TAT.
pub fn process_table(completed: &[CompletedProcess]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(
        out,
        "{:>COL$}{:>COL$}{:>COL$}{:>COL$}{:>COL$}{:>COL$}{:>COL$}",
        "PID", "AT", "BT", "PR", "CT", "WT", "TAT"
    );
    let _ = writeln!(out, "{}", "-".repeat(50));
    for c in completed {
        let p = &c.process;
        let _ = writeln!(
            out,
            "{:>COL$}{:>COL$}{:>COL$}{:>COL$}{:>COL$}{:>COL$}{:>COL$}",
            p.id,
            p.arrival_time,
            p.burst_time,
            p.priority,
            c.completion_time,
            c.waiting_time,
            c.turnaround_time
        );
    }
    let _ = writeln!(out, "{}", "=".repeat(50));
    out
}

/// Average waiting and turnaround lines, two decimals.
pub fn averages(metrics: &RunMetrics) -> String {
    format!(
        "Average Waiting Time: {:.2} units\nAverage Turnaround Time: {:.2} units\n",
        metrics.avg_waiting_time, metrics.avg_turnaround_time
    )
}

/// Three-row bar chart plus a time-marker row.
///
/// Each time unit is two characters wide; idle slices are labelled `idle`.
///
/// ```text
/// |----------|------|
/// |    P1    |  P2  |
/// |----------|------|
/// 0          5      8
/// ```
pub fn gantt_chart(timeline: &Timeline) -> String {
    let mut border = String::from("|");
    let mut labels = String::from("|");
    let mut markers = String::from("0");
    let mut bar_col = 0usize;

    for entry in &timeline.entries {
        let width = usize::try_from(entry.duration)
            .unwrap_or(0)
            .saturating_mul(2)
            .min(MAX_SLICE_WIDTH);
        let label = match entry.process_id {
            Some(id) => format!("P{id}"),
            None => "idle".to_string(),
        };

        border.push_str(&"-".repeat(width));
        border.push('|');

        let spaces = width.saturating_sub(label.len());
        labels.push_str(&" ".repeat(spaces / 2));
        labels.push_str(&label);
        labels.push_str(&" ".repeat(spaces - spaces / 2));
        labels.push('|');

        // Right-align each marker under its closing bar
        bar_col += width + 1;
        let time = entry.end().to_string();
        let pad = (bar_col + 1)
            .saturating_sub(markers.len() + time.len())
            .max(1);
        markers.push_str(&" ".repeat(pad));
        markers.push_str(&time);
    }

    format!("{border}\n{labels}\n{border}\n{markers}\n")
}

/// Full report for one run: title, table, averages and Gantt chart.
pub fn run_report(result: &RunResult) -> String {
    let metrics = RunMetrics::calculate(result);
    let title = result.policy.to_string().to_uppercase();
    format!(
        "=== {title} ===\n\nProcess Table:\n{}\n{}\nGantt Chart:\n{}\n{}",
        process_table(&result.completed),
        averages(&metrics),
        "=".repeat(60),
        gantt_chart(&result.timeline)
    )
}
