use serde::Serialize;
use workpax_domain::{
    Project, ProjectId, SuggestedBucket, Task, TaskContribution, TaskStats, TriageBucket,
    WorkSummary, progress_breakdown, project_completion_percent,
};

use super::{BoardCard, TriagePass};

/// Task listed on the backlog view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BacklogCard {
    /// Task snapshot.
    pub task: Task,
    /// Whether to show the overdue badge.
    pub overdue: bool,
    /// Urgency tier.
    pub triage: TriageBucket,
    /// Whole days until due, negative when overdue.
    pub days_until_due: Option<i64>,
}

/// Project section on the backlog view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BacklogProject {
    /// Project id.
    pub project_id: ProjectId,
    /// Project name.
    pub name: String,
    /// Tasks suggested for the backlog, in input order.
    pub tasks: Vec<BacklogCard>,
}

/// Per-project reporting figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectReport {
    /// Project id.
    pub project_id: ProjectId,
    /// Project name.
    pub name: String,
    /// Per-status counts.
    pub stats: TaskStats,
    /// Weighted completion, unrounded.
    pub completion_percent: f64,
    /// Contributing tasks.
    pub breakdown: Vec<TaskContribution>,
    /// Overdue tasks.
    pub overdue: usize,
    /// Tasks due today or tomorrow that are not completed or overdue.
    pub urgent_soon: usize,
}

/// Tasks assigned to one user across projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YourWork {
    /// Headline counts.
    pub summary: WorkSummary,
    /// Assigned tasks, in project then task order.
    pub cards: Vec<BoardCard>,
}

pub(super) fn backlog(pass: &TriagePass, projects: &[Project]) -> Vec<BacklogProject> {
    projects
        .iter()
        .filter_map(|project| {
            let tasks: Vec<BacklogCard> = project
                .tasks()
                .iter()
                .filter(|task| pass.suggested_bucket(task) == SuggestedBucket::Backlog)
                .map(|task| BacklogCard {
                    task: task.clone(),
                    overdue: pass.is_overdue(task),
                    triage: pass.triage_bucket(task),
                    days_until_due: pass.days_until_due(task),
                })
                .collect();

            (!tasks.is_empty()).then(|| BacklogProject {
                project_id: project.id().clone(),
                name: project.name().to_owned(),
                tasks,
            })
        })
        .collect()
}

impl TriagePass {
    /// Builds the reporting figures for one project.
    #[must_use]
    pub fn project_report(&self, project: &Project) -> ProjectReport {
        let tasks = project.tasks();
        let (overdue, urgent_soon) =
            tasks
                .iter()
                .fold((0, 0), |(overdue, urgent), task| match self.triage_bucket(task) {
                    TriageBucket::Overdue => (overdue + 1, urgent),
                    TriageBucket::UrgentSoon => (overdue, urgent + 1),
                    TriageBucket::Normal => (overdue, urgent),
                });

        ProjectReport {
            project_id: project.id().clone(),
            name: project.name().to_owned(),
            stats: TaskStats::from_tasks(tasks),
            completion_percent: project_completion_percent(tasks),
            breakdown: progress_breakdown(tasks),
            overdue,
            urgent_soon,
        }
    }

    /// Collects the tasks assigned to `user_id`.
    #[must_use]
    pub fn your_work(&self, projects: &[Project], user_id: &str) -> YourWork {
        let assigned: Vec<Task> = projects
            .iter()
            .flat_map(Project::tasks)
            .filter(|task| task.assignee().is_some_and(|assignee| assignee.as_str() == user_id))
            .cloned()
            .collect();

        YourWork {
            summary: WorkSummary::from_tasks(&assigned),
            cards: assigned.iter().map(|task| self.card(task)).collect(),
        }
    }
}
