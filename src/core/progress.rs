//! Task-completion rollups expressed as clamped integer percentages.

use crate::core::config::{Project, TaskStatus};

/// Converts a raw completion ratio into an integer percentage in [0, 100].
///
/// Non-finite ratios (the result of dividing by zero upstream, or data that
/// never was a number) degrade to 0 rather than propagating.
pub fn ratio_to_percent(ratio: f64) -> u8 {
    if !ratio.is_finite() {
        return 0;
    }
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Percentage of `completed` out of `total`, clamped to [0, 100].
///
/// A `total` of zero yields 0 regardless of `completed`.
pub fn percent_complete(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ratio_to_percent(completed as f64 / total as f64)
}

pub fn format_percent(pct: u8) -> String {
    format!("{pct}%")
}

/// Overall completion of a project: completed subtasks over all subtasks
/// across every objective. A project with no subtasks reports 0.
pub fn project_progress(project: &Project) -> u8 {
    let mut completed = 0;
    let mut total = 0;
    for objective in &project.objectives {
        for task in &objective.tasks {
            total += 1;
            if task.status == TaskStatus::Completed {
                completed += 1;
            }
        }
    }
    percent_complete(completed, total)
}
