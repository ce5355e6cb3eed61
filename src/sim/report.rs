//! Output collaborator: completion rows plus a trailing mean-statistics row.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use average::{Estimate, Mean};

use crate::core::ProcessRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionSummary {
    pub mean_turnaround: f64,
    pub mean_normalized_turnaround: f64,
}

// Arithmetic means over the finished set; None when nothing finished, so the
// caller never divides by a zero count
pub fn summarize(finished: &[ProcessRecord]) -> Option<CompletionSummary> {
    if finished.is_empty() {
        return None;
    }
    let turnaround: Mean = finished
        .iter()
        .map(|p| p.turnaround_time.expect("finished process missing turnaround") as f64)
        .collect();
    let normalized: Mean = finished
        .iter()
        .map(|p| {
            p.normalized_turnaround
                .expect("finished process missing normalized turnaround")
        })
        .collect();
    Some(CompletionSummary {
        mean_turnaround: turnaround.estimate(),
        mean_normalized_turnaround: normalized.estimate(),
    })
}

pub fn render_completion_report(finished: &[ProcessRecord]) -> String {
    let mut out = String::new();
    for proc in finished {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            proc.name,
            proc.arrival_time,
            proc.service_time,
            proc.start_time.expect("finished process missing start time"),
            proc.finish_time.expect("finished process missing finish time"),
            proc.turnaround_time
                .expect("finished process missing turnaround"),
            proc.normalized_turnaround
                .expect("finished process missing normalized turnaround"),
        ));
    }
    match summarize(finished) {
        Some(summary) => out.push_str(&format!(
            "{},{}\n",
            summary.mean_turnaround, summary.mean_normalized_turnaround
        )),
        None => out.push_str("no data\n"),
    }
    out
}

pub fn write_completion_report(path: &Path, finished: &[ProcessRecord]) -> Result<()> {
    fs::write(path, render_completion_report(finished))
        .with_context(|| format!("writing completion report {}", path.display()))
}
