//! Read-only task snapshots and per-status bookkeeping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{TaskId, UserId};

/// Lifecycle status reported by the task API.
///
/// Values outside the six known statuses are preserved as
/// [`TaskStatus::Unrecognized`] so a snapshot never fails to load because of
/// a status this client does not know yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    /// Parked work, or work pulled back for attention.
    Backlog,
    /// Ready to start.
    Todo,
    /// Being worked on.
    InProgress,
    /// Waiting for review.
    Review,
    /// Done.
    Completed,
    /// Cannot progress.
    Blocked,
    /// Any other value the API sent.
    Unrecognized(String),
}

impl TaskStatus {
    /// Returns the six known statuses in board column order.
    #[must_use]
    pub fn known() -> &'static [Self] {
        const KNOWN: &[TaskStatus] = &[
            TaskStatus::Backlog,
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Review,
            TaskStatus::Completed,
            TaskStatus::Blocked,
        ];

        KNOWN
    }

    /// Returns the wire value for this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// Returns whether this is one of the six known statuses.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Returns whether the task is done.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Fraction of a task's share credited toward project completion.
    #[must_use]
    pub fn progress_weight(&self) -> f64 {
        match self {
            Self::Completed => 1.0,
            Self::Review => 0.30,
            Self::InProgress => 0.15,
            Self::Todo => 0.05,
            Self::Backlog | Self::Blocked | Self::Unrecognized(_) => 0.0,
        }
    }

    /// Returns a human label, e.g. `In Progress` for `in-progress`.
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<&str> for TaskStatus {
    fn from(value: &str) -> Self {
        match value {
            "backlog" => Self::Backlog,
            "todo" => Self::Todo,
            "in-progress" => Self::InProgress,
            "review" => Self::Review,
            "completed" => Self::Completed,
            "blocked" => Self::Blocked,
            other => Self::Unrecognized(other.to_owned()),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<TaskStatus> for String {
    fn from(value: TaskStatus) -> Self {
        match value {
            TaskStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Task priority.
///
/// Values outside the four known priorities are kept as
/// [`TaskPriority::Unrecognized`], mirroring [`TaskStatus`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Default priority.
    #[default]
    Medium,
    /// Should be picked up soon.
    High,
    /// Drop everything.
    Urgent,
    /// Any other value the API sent.
    Unrecognized(String),
}

impl TaskPriority {
    /// Returns the four known priorities, most pressing first.
    #[must_use]
    pub fn known() -> &'static [Self] {
        const KNOWN: &[TaskPriority] = &[
            TaskPriority::Urgent,
            TaskPriority::High,
            TaskPriority::Medium,
            TaskPriority::Low,
        ];

        KNOWN
    }

    /// Returns the wire value for this priority.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// Returns whether this is one of the four known priorities.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for TaskPriority {
    fn from(value: &str) -> Self {
        match value {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            "urgent" => Self::Urgent,
            other => Self::Unrecognized(other.to_owned()),
        }
    }
}

impl From<String> for TaskPriority {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<TaskPriority> for String {
    fn from(value: TaskPriority) -> Self {
        match value {
            TaskPriority::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Snapshot of the task fields that drive triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    id: Option<TaskId>,
    title: String,
    status: TaskStatus,
    #[serde(default)]
    priority: TaskPriority,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    assignee: Option<UserId>,
}

impl Task {
    /// Creates a task snapshot with medium priority and no due date.
    #[must_use]
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: None,
            title: title.into(),
            status,
            priority: TaskPriority::default(),
            due_date: None,
            assignee: None,
        }
    }

    /// Sets the task identifier.
    #[must_use]
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the calendar day the task is due.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the user the task is assigned to.
    #[must_use]
    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Returns the task identifier, when the API supplied one.
    #[must_use]
    pub fn id(&self) -> Option<&TaskId> {
        self.id.as_ref()
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the reported status.
    #[must_use]
    pub fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the task priority.
    #[must_use]
    pub fn priority(&self) -> &TaskPriority {
        &self.priority
    }

    /// Returns the due day, if any.
    #[must_use]
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub fn assignee(&self) -> Option<&UserId> {
        self.assignee.as_ref()
    }
}

/// Per-status task counts.
///
/// `total` is the number of tasks counted, including tasks whose status is
/// unrecognised and therefore increments no per-status counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    /// Tasks in backlog.
    pub backlog: usize,
    /// Tasks in todo.
    pub todo: usize,
    /// Tasks in progress.
    #[serde(rename = "in-progress")]
    pub in_progress: usize,
    /// Tasks in review.
    pub review: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Blocked tasks.
    pub blocked: usize,
    /// All tasks.
    pub total: usize,
}

impl TaskStats {
    /// Counts tasks by status.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut stats = Self {
            total: tasks.len(),
            ..Self::default()
        };

        for task in tasks {
            match task.status() {
                TaskStatus::Backlog => stats.backlog += 1,
                TaskStatus::Todo => stats.todo += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Review => stats.review += 1,
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::Blocked => stats.blocked += 1,
                TaskStatus::Unrecognized(_) => {}
            }
        }

        stats
    }

    /// Returns the count for one status. Unrecognised statuses count zero.
    #[must_use]
    pub fn count(&self, status: &TaskStatus) -> usize {
        match status {
            TaskStatus::Backlog => self.backlog,
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Review => self.review,
            TaskStatus::Completed => self.completed,
            TaskStatus::Blocked => self.blocked,
            TaskStatus::Unrecognized(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskPriority, TaskStats, TaskStatus};

    #[test]
    fn unknown_status_survives_deserialization() {
        let task = serde_json::from_str::<Task>(r#"{"title":"Ship","status":"archived"}"#);
        let task = task.ok();
        assert_eq!(
            task.as_ref().map(Task::status),
            Some(&TaskStatus::Unrecognized("archived".to_owned()))
        );
        assert_eq!(
            task.as_ref().map(Task::priority),
            Some(&TaskPriority::Medium)
        );
    }

    #[test]
    fn status_wire_value_is_kebab_case() {
        let encoded = serde_json::to_string(&TaskStatus::InProgress).unwrap_or_default();
        assert_eq!(encoded, "\"in-progress\"");
        assert_eq!(TaskStatus::from("in-progress"), TaskStatus::InProgress);
    }

    #[test]
    fn status_labels_are_title_cased() {
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
        assert_eq!(TaskStatus::Todo.label(), "Todo");
        assert_eq!(TaskStatus::from("on-hold").label(), "On Hold");
    }

    #[test]
    fn progress_weights_match_table() {
        assert_eq!(TaskStatus::Completed.progress_weight(), 1.0);
        assert_eq!(TaskStatus::Review.progress_weight(), 0.30);
        assert_eq!(TaskStatus::InProgress.progress_weight(), 0.15);
        assert_eq!(TaskStatus::Todo.progress_weight(), 0.05);
        assert_eq!(TaskStatus::Backlog.progress_weight(), 0.0);
        assert_eq!(TaskStatus::Blocked.progress_weight(), 0.0);
        assert_eq!(TaskStatus::from("bogus").progress_weight(), 0.0);
    }

    #[test]
    fn stats_total_includes_unrecognized_statuses() {
        let tasks = vec![
            Task::new("a", TaskStatus::Todo),
            Task::new("b", TaskStatus::from("unknown-value")),
        ];

        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.todo, 1);
        assert_eq!(stats.backlog + stats.in_progress + stats.review, 0);
        assert_eq!(stats.completed + stats.blocked, 0);
        assert_eq!(stats.total, 2);
    }

    #[test]
    fn stats_serialize_with_status_keys() {
        let stats = TaskStats::from_tasks(&[Task::new("a", TaskStatus::InProgress)]);
        let encoded = serde_json::to_value(stats).unwrap_or_default();
        assert_eq!(encoded["in-progress"], 1);
        assert_eq!(encoded["total"], 1);
    }

    #[test]
    fn unknown_priority_survives_deserialization() {
        let task =
            serde_json::from_str::<Task>(r#"{"title":"Ship","status":"todo","priority":"High"}"#);
        let task = task.ok();
        assert_eq!(
            task.as_ref().map(Task::priority),
            Some(&TaskPriority::Unrecognized("High".to_owned()))
        );

        let encoded = task
            .map(|value| serde_json::to_value(value).unwrap_or_default())
            .unwrap_or_default();
        assert_eq!(encoded["priority"], "High");
    }

    #[test]
    fn priority_wire_values_are_lowercase() {
        assert_eq!(TaskPriority::from("urgent"), TaskPriority::Urgent);
        assert_eq!(TaskPriority::from("critical").as_str(), "critical");
        assert!(!TaskPriority::from("critical").is_recognized());
        let encoded = serde_json::to_string(&TaskPriority::High).unwrap_or_default();
        assert_eq!(encoded, "\"high\"");
    }
}
