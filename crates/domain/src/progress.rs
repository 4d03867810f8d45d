//! Weighted project completion.
//!
//! Each task owns an equal share of the project and earns a fraction of that
//! share depending on its status. Values stay unrounded here; rounding is a
//! presentation concern.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskStats, TaskStatus};

/// Weighted completion of a project in percent, within `[0, 100]`.
///
/// An empty task list is 0% complete. Contributions are accumulated per
/// status in a fixed order, so the result does not depend on task order.
#[must_use]
pub fn project_completion_percent(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }

    let stats = TaskStats::from_tasks(tasks);
    let share = task_share(tasks.len());

    TaskStatus::known()
        .iter()
        .map(|status| stats.count(status) as f64 * share * status.progress_weight())
        .sum()
}

/// One task's slice of the project completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskContribution {
    /// Task title.
    pub title: String,
    /// Task status.
    pub status: TaskStatus,
    /// Equal share of the project owned by each task, in percent.
    pub share: f64,
    /// Fraction of the share earned by the status.
    pub weight: f64,
    /// `share * weight`, in percent.
    pub contribution: f64,
}

/// Lists the tasks that contribute to completion, in input order.
///
/// Tasks whose status earns nothing are left out.
#[must_use]
pub fn progress_breakdown(tasks: &[Task]) -> Vec<TaskContribution> {
    if tasks.is_empty() {
        return Vec::new();
    }

    let share = task_share(tasks.len());
    tasks
        .iter()
        .filter_map(|task| {
            let weight = task.status().progress_weight();
            let contribution = share * weight;
            (contribution > 0.0).then(|| TaskContribution {
                title: task.title().to_owned(),
                status: task.status().clone(),
                share,
                weight,
                contribution,
            })
        })
        .collect()
}

/// Personal work summary shown on the "your work" view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSummary {
    /// Assigned tasks.
    pub total: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Tasks in progress.
    pub in_progress: usize,
    /// Tasks in todo.
    pub todo: usize,
    /// Completed share of all tasks, rounded to a whole percent.
    pub completion_rate: u8,
}

impl WorkSummary {
    /// Summarises a user's assigned tasks.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let stats = TaskStats::from_tasks(tasks);
        Self {
            total: stats.total,
            completed: stats.completed,
            in_progress: stats.in_progress,
            todo: stats.todo,
            completion_rate: rounded_rate(stats.completed, stats.total),
        }
    }
}

/// Whole-percent share of `part` in `total`, or zero for an empty total.
pub(crate) fn rounded_rate(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    let rate = (part as f64 / total as f64 * 100.0).round();
    rate.clamp(0.0, 100.0) as u8
}

fn task_share(task_count: usize) -> f64 {
    100.0 / task_count as f64
}
