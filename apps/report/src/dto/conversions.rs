use tracing::debug;
use workpax_application::{
    BacklogCard, BacklogProject, BoardCard, BoardColumn, PriorityGroup, TriageService, YourWork,
};
use workpax_core::{AppResult, UserIdentity};
use workpax_domain::{
    OrganizationSummary, Project, ProjectId, ProjectStatus, Task, TaskContribution, TaskId,
    TaskPriority, TaskStats, TaskStatus, Team, TeamId, TeamMember, TriageBucket, UserId,
};

use crate::digest::Snapshot;

use super::digest::{
    BacklogProjectResponse, BoardColumnResponse, ContributionResponse,
    OrganizationSummaryResponse, PriorityGroupResponse, TaskCardResponse, TaskStatsResponse,
    YourWorkResponse,
};
use super::snapshot::{ProjectRequest, SnapshotRequest, TaskRequest, TeamRequest, ViewerRequest};

impl SnapshotRequest {
    /// Validates the snapshot and parses due dates in the service's zone.
    pub fn into_snapshot(self, service: &TriageService) -> AppResult<Snapshot> {
        Ok(Snapshot {
            viewer: self.viewer.into(),
            selected_team: self.selected_team.map(TeamRequest::into_team).transpose()?,
            projects: self
                .projects
                .into_iter()
                .map(|project| project.into_project(service))
                .collect::<AppResult<Vec<_>>>()?,
        })
    }
}

impl From<ViewerRequest> for UserIdentity {
    fn from(value: ViewerRequest) -> Self {
        let display_name = value
            .display_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| value.subject.clone());
        UserIdentity::new(value.subject, display_name, value.email, value.role)
    }
}

impl TeamRequest {
    fn into_team(self) -> AppResult<Team> {
        let members = self
            .members
            .into_iter()
            .map(|member| Ok(TeamMember::new(UserId::new(member.user_id)?, member.role)))
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Team::new(TeamId::new(self.id)?, self.name, members))
    }
}

impl ProjectRequest {
    fn into_project(self, service: &TriageService) -> AppResult<Project> {
        let team_id = non_blank(self.team_id).map(TeamId::new).transpose()?;
        let tasks = self
            .tasks
            .into_iter()
            .map(|task| task.into_task(service))
            .collect::<AppResult<Vec<_>>>()?;
        let project = Project::new(ProjectId::new(self.id)?, self.name, team_id, tasks);
        Ok(match non_blank(self.status) {
            Some(status) => project.with_status(ProjectStatus::from(status)),
            None => project,
        })
    }
}

impl TaskRequest {
    fn into_task(self, service: &TriageService) -> AppResult<Task> {
        let mut task = Task::new(self.title, TaskStatus::from(self.status));
        if let Some(id) = non_blank(self.id) {
            task = task.with_id(TaskId::new(id)?);
        }
        if let Some(priority) = non_blank(self.priority) {
            task = task.with_priority(TaskPriority::from(priority));
        }
        if let Some(due_date) = non_blank(self.due_date) {
            match service.parse_due_date(due_date.as_str()) {
                Ok(day) => task = task.with_due_date(day),
                Err(error) => {
                    debug!(title = %task.title(), %error, "ignoring unparseable due date");
                }
            }
        }
        if let Some(assignee) = non_blank(self.assignee) {
            task = task.with_assignee(UserId::new(assignee)?);
        }
        Ok(task)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

pub(crate) fn count(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

pub(crate) fn task_card(
    task: &Task,
    days_until_due: Option<i64>,
    triage: TriageBucket,
) -> TaskCardResponse {
    TaskCardResponse {
        task_id: task.id().map(|id| id.as_str().to_owned()),
        title: task.title().to_owned(),
        status: task.status().as_str().to_owned(),
        status_label: task.status().label(),
        priority: task.priority().as_str().to_owned(),
        due_date: task.due_date().map(|due_date| due_date.to_string()),
        days_until_due: days_until_due.map(|days| {
            i32::try_from(days).unwrap_or(if days < 0 { i32::MIN } else { i32::MAX })
        }),
        triage: triage.as_str().to_owned(),
        assignee: task.assignee().map(|assignee| assignee.as_str().to_owned()),
    }
}

impl From<&TaskStats> for TaskStatsResponse {
    fn from(value: &TaskStats) -> Self {
        Self {
            backlog: count(value.backlog),
            todo: count(value.todo),
            in_progress: count(value.in_progress),
            review: count(value.review),
            completed: count(value.completed),
            blocked: count(value.blocked),
            total: count(value.total),
        }
    }
}

impl From<&BoardCard> for TaskCardResponse {
    fn from(value: &BoardCard) -> Self {
        task_card(&value.task, value.days_until_due, value.triage)
    }
}

impl From<&BacklogCard> for TaskCardResponse {
    fn from(value: &BacklogCard) -> Self {
        task_card(&value.task, value.days_until_due, value.triage)
    }
}

impl From<&BoardColumn> for BoardColumnResponse {
    fn from(value: &BoardColumn) -> Self {
        Self {
            status: value.status.as_str().to_owned(),
            title: value.title.to_owned(),
            cards: value.cards.iter().map(TaskCardResponse::from).collect(),
        }
    }
}

impl From<&TaskContribution> for ContributionResponse {
    fn from(value: &TaskContribution) -> Self {
        Self {
            title: value.title.clone(),
            status: value.status.as_str().to_owned(),
            share: value.share,
            weight: value.weight,
            contribution: value.contribution,
            contribution_label: format!("{:.1}%", value.contribution),
        }
    }
}

impl From<&BacklogProject> for BacklogProjectResponse {
    fn from(value: &BacklogProject) -> Self {
        Self {
            project_id: value.project_id.as_str().to_owned(),
            name: value.name.clone(),
            tasks: value.tasks.iter().map(TaskCardResponse::from).collect(),
        }
    }
}

impl From<&YourWork> for YourWorkResponse {
    fn from(value: &YourWork) -> Self {
        Self {
            total: count(value.summary.total),
            completed: count(value.summary.completed),
            in_progress: count(value.summary.in_progress),
            todo: count(value.summary.todo),
            completion_rate: value.summary.completion_rate,
            cards: value.cards.iter().map(TaskCardResponse::from).collect(),
        }
    }
}

impl From<&PriorityGroup> for PriorityGroupResponse {
    fn from(value: &PriorityGroup) -> Self {
        Self {
            priority: value.priority.as_str().to_owned(),
            cards: value.cards.iter().map(TaskCardResponse::from).collect(),
        }
    }
}

impl From<&OrganizationSummary> for OrganizationSummaryResponse {
    fn from(value: &OrganizationSummary) -> Self {
        Self {
            total_projects: count(value.total),
            active: count(value.active),
            pending: count(value.pending),
            completed: count(value.completed),
            active_rate: value.active_rate,
            completion_rate: value.completion_rate,
        }
    }
}
