//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod ids;
mod permission_table;
mod progress;
mod project;
mod security;
mod task;
mod team;
mod triage;

pub use ids::{ProjectId, TaskId, TeamId, UserId};
pub use permission_table::{Capability, PermissionTable};
pub use progress::{TaskContribution, WorkSummary, progress_breakdown, project_completion_percent};
pub use project::{OrganizationSummary, Project, ProjectStatus};
pub use security::{Action, Permission, Resource, Role, RoleSet};
pub use task::{Task, TaskPriority, TaskStats, TaskStatus};
pub use team::{Team, TeamMember};
pub use triage::{
    MoveWarning, SuggestedBucket, TriageBucket, URGENT_WINDOW_DAYS, days_until_due, is_overdue,
    is_urgent_soon, move_status_warning, suggested_bucket, triage_bucket,
};
