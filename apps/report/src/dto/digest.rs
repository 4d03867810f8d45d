use serde::Serialize;
use ts_rs::TS;

/// Triage digest printed by the report.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "digest-response.ts")]
pub struct DigestResponse {
    /// Calendar day every classification was made against.
    pub day: String,
    pub viewer: ViewerAccessResponse,
    pub organization: OrganizationSummaryResponse,
    pub projects: Vec<ProjectDigestResponse>,
    pub backlog: Vec<BacklogProjectResponse>,
    pub your_work: YourWorkResponse,
}

/// Resolved roles and client affordances for the viewer.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "viewer-access-response.ts")]
pub struct ViewerAccessResponse {
    pub subject: String,
    pub base_role: String,
    pub team_role: Option<String>,
    pub effective_role: String,
    pub capabilities: Vec<String>,
    pub permissions: Vec<String>,
}

/// Per-project board and progress.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "project-digest-response.ts")]
pub struct ProjectDigestResponse {
    pub project_id: String,
    pub name: String,
    pub status: Option<String>,
    pub can_edit: bool,
    pub completion_percent: f64,
    pub completion_label: String,
    pub stats: TaskStatsResponse,
    pub overdue: u32,
    pub urgent_soon: u32,
    pub columns: Vec<BoardColumnResponse>,
    pub unplaced: Vec<TaskCardResponse>,
    pub breakdown: Vec<ContributionResponse>,
    pub roadmap: Vec<PriorityGroupResponse>,
    pub unprioritized: Vec<TaskCardResponse>,
}

/// Per-status task counts.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "task-stats-response.ts")]
pub struct TaskStatsResponse {
    pub backlog: u32,
    pub todo: u32,
    #[serde(rename = "in-progress")]
    pub in_progress: u32,
    pub review: u32,
    pub completed: u32,
    pub blocked: u32,
    pub total: u32,
}

/// One board column.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "board-column-response.ts")]
pub struct BoardColumnResponse {
    pub status: String,
    pub title: String,
    pub cards: Vec<TaskCardResponse>,
}

/// Task card with its triage badges.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "task-card-response.ts")]
pub struct TaskCardResponse {
    pub task_id: Option<String>,
    pub title: String,
    pub status: String,
    pub status_label: String,
    pub priority: String,
    pub due_date: Option<String>,
    pub days_until_due: Option<i32>,
    pub triage: String,
    pub assignee: Option<String>,
}

/// One task's share of project completion.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "contribution-response.ts")]
pub struct ContributionResponse {
    pub title: String,
    pub status: String,
    pub share: f64,
    pub weight: f64,
    pub contribution: f64,
    pub contribution_label: String,
}

/// Backlog tasks of one project.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "backlog-project-response.ts")]
pub struct BacklogProjectResponse {
    pub project_id: String,
    pub name: String,
    pub tasks: Vec<TaskCardResponse>,
}

/// Tasks assigned to the viewer.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "your-work-response.ts")]
pub struct YourWorkResponse {
    pub total: u32,
    pub completed: u32,
    pub in_progress: u32,
    pub todo: u32,
    pub completion_rate: u8,
    pub cards: Vec<TaskCardResponse>,
}

/// Project lifecycle counts across the snapshot.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "organization-summary-response.ts")]
pub struct OrganizationSummaryResponse {
    pub total_projects: u32,
    pub active: u32,
    pub pending: u32,
    pub completed: u32,
    pub active_rate: u8,
    pub completion_rate: u8,
}

/// Roadmap section for one priority.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "priority-group-response.ts")]
pub struct PriorityGroupResponse {
    pub priority: String,
    pub cards: Vec<TaskCardResponse>,
}
