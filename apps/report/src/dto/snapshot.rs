use serde::Deserialize;
use ts_rs::TS;

/// Workspace snapshot read by the report.
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "snapshot-request.ts")]
pub struct SnapshotRequest {
    pub viewer: ViewerRequest,
    #[serde(default)]
    pub selected_team: Option<TeamRequest>,
    #[serde(default)]
    pub projects: Vec<ProjectRequest>,
}

/// Signed-in user claims.
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "viewer-request.ts")]
pub struct ViewerRequest {
    pub subject: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Team selected in the client.
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "team-request.ts")]
pub struct TeamRequest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<TeamMemberRequest>,
}

/// Membership record inside a team.
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "team-member-request.ts")]
pub struct TeamMemberRequest {
    pub user_id: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Project with its tasks.
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "project-request.ts")]
pub struct ProjectRequest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub team_id: Option<String>,
    /// Lifecycle status such as `active`, `pending` or `completed`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tasks: Vec<TaskRequest>,
}

/// Task as sent by the task API.
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "task-request.ts")]
pub struct TaskRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub priority: Option<String>,
    /// `YYYY-MM-DD` or a timestamp. Unparseable values are ignored.
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
}
