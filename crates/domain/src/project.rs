use serde::{Deserialize, Serialize};

use crate::ids::{ProjectId, TeamId};
use crate::progress::rounded_rate;
use crate::task::Task;

/// Project lifecycle status reported by the project API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    /// Running.
    Active,
    /// Running, as sent by older clients.
    InProgress,
    /// Not started yet.
    Pending,
    /// Paused.
    OnHold,
    /// Finished.
    Completed,
    /// Any other value the API sent.
    Unrecognized(String),
}

impl ProjectStatus {
    /// Returns the wire value for this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::InProgress => "in-progress",
            Self::Pending => "pending",
            Self::OnHold => "on-hold",
            Self::Completed => "completed",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// Returns whether the project counts as active on the dashboard.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active | Self::InProgress)
    }
}

impl From<&str> for ProjectStatus {
    fn from(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "in-progress" => Self::InProgress,
            "pending" => Self::Pending,
            "on-hold" => Self::OnHold,
            "completed" => Self::Completed,
            other => Self::Unrecognized(other.to_owned()),
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ProjectStatus> for String {
    fn from(value: ProjectStatus) -> Self {
        match value {
            ProjectStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Project with the task list fetched for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    #[serde(default)]
    team_id: Option<TeamId>,
    #[serde(default)]
    status: Option<ProjectStatus>,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl Project {
    /// Creates a project snapshot without a lifecycle status.
    #[must_use]
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        team_id: Option<TeamId>,
        tasks: Vec<Task>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            team_id,
            status: None,
            tasks,
        }
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the project id.
    #[must_use]
    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the owning team, if the project is assigned to one.
    #[must_use]
    pub fn team_id(&self) -> Option<&TeamId> {
        self.team_id.as_ref()
    }

    /// Returns the lifecycle status, if the API sent one.
    #[must_use]
    pub fn status(&self) -> Option<&ProjectStatus> {
        self.status.as_ref()
    }

    /// Returns the project's tasks.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// Lifecycle counts across an organization's projects.
///
/// Projects without a status, or with one outside active, pending and
/// completed, only count toward `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    /// All projects.
    pub total: usize,
    /// Projects that are active or in progress.
    pub active: usize,
    /// Projects not started yet.
    pub pending: usize,
    /// Finished projects.
    pub completed: usize,
    /// Active share of all projects, rounded to a whole percent.
    pub active_rate: u8,
    /// Completed share of all projects, rounded to a whole percent.
    pub completion_rate: u8,
}

impl OrganizationSummary {
    /// Counts projects by lifecycle status.
    #[must_use]
    pub fn from_projects(projects: &[Project]) -> Self {
        let mut summary = Self {
            total: projects.len(),
            ..Self::default()
        };

        for status in projects.iter().filter_map(Project::status) {
            match status {
                ProjectStatus::Active | ProjectStatus::InProgress => summary.active += 1,
                ProjectStatus::Pending => summary.pending += 1,
                ProjectStatus::Completed => summary.completed += 1,
                ProjectStatus::OnHold | ProjectStatus::Unrecognized(_) => {}
            }
        }

        summary.active_rate = rounded_rate(summary.active, summary.total);
        summary.completion_rate = rounded_rate(summary.completed, summary.total);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::{OrganizationSummary, Project, ProjectStatus};
    use crate::ids::ProjectId;

    fn project(index: usize, status: Option<&str>) -> Project {
        let Ok(id) = ProjectId::new(format!("p-{index}")) else {
            panic!("project id should be valid");
        };
        let project = Project::new(id, format!("Project {index}"), None, Vec::new());
        match status {
            Some(status) => project.with_status(ProjectStatus::from(status)),
            None => project,
        }
    }

    #[test]
    fn empty_organization_has_zero_rates() {
        let summary = OrganizationSummary::from_projects(&[]);
        assert_eq!(summary, OrganizationSummary::default());
    }

    #[test]
    fn in_progress_projects_count_as_active() {
        let projects = [
            project(1, Some("active")),
            project(2, Some("in-progress")),
            project(3, Some("pending")),
            project(4, Some("completed")),
            project(5, Some("on-hold")),
            project(6, None),
        ];

        let summary = OrganizationSummary::from_projects(&projects);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.active_rate, 33);
        assert_eq!(summary.completion_rate, 17);
    }

    #[test]
    fn unknown_project_status_is_kept_verbatim() {
        let status = serde_json::from_str::<ProjectStatus>("\"archived\"").ok();
        assert_eq!(status, Some(ProjectStatus::Unrecognized("archived".to_owned())));
        assert!(!ProjectStatus::from("archived").is_active());
        let encoded = serde_json::to_string(&ProjectStatus::OnHold).unwrap_or_default();
        assert_eq!(encoded, "\"on-hold\"");
    }
}
