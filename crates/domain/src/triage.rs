//! Due-date triage rules.
//!
//! All rules work on calendar days. Callers truncate "now" to a day once per
//! batch and pass the same `today` to every call in that batch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskStatus};

/// A task due within this many days (or overdue) needs attention.
pub const URGENT_WINDOW_DAYS: i64 = 1;

/// Display bucket suggested for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestedBucket {
    /// Show the task in the backlog/attention column.
    Backlog,
    /// Show the task in the column named by its status.
    ByStatus,
}

/// Urgency tier of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriageBucket {
    /// Past its due day and not completed.
    Overdue,
    /// Due today or tomorrow and not completed.
    UrgentSoon,
    /// Everything else.
    Normal,
}

/// Advisory signal raised when a task is moved out of the backlog.
///
/// The move is always allowed; this only selects the message shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveWarning {
    /// Nothing to report.
    None,
    /// The task is due today or tomorrow.
    WarnUrgent,
    /// The task is past its due day.
    ErrorOverdue,
}

impl SuggestedBucket {
    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::ByStatus => "by-status",
        }
    }
}

impl TriageBucket {
    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::UrgentSoon => "urgent-soon",
            Self::Normal => "normal",
        }
    }
}

impl MoveWarning {
    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::WarnUrgent => "warn-urgent",
            Self::ErrorOverdue => "error-overdue",
        }
    }
}

/// Whole days from `today` to the task's due day.
///
/// `Some(0)` means due today, negative values mean overdue by that many days,
/// and `None` means the task has no due date.
#[must_use]
pub fn days_until_due(task: &Task, today: NaiveDate) -> Option<i64> {
    task.due_date()
        .map(|due_date| due_date.signed_duration_since(today).num_days())
}

/// Returns whether the task is past its due day and not completed.
#[must_use]
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.status().is_completed() && days_until_due(task, today).is_some_and(|days| days < 0)
}

/// Returns whether the task is due within the urgent window, overdue included.
///
/// Status is not considered.
#[must_use]
pub fn is_urgent_soon(task: &Task, today: NaiveDate) -> bool {
    days_until_due(task, today).is_some_and(|days| days <= URGENT_WINDOW_DAYS)
}

/// Suggests the display bucket for a task.
///
/// Backlog tasks always land in the backlog bucket. Tasks that are urgent
/// soon (overdue included) are pulled into it too, unless completed. The
/// task's own status is never changed by this.
#[must_use]
pub fn suggested_bucket(task: &Task, today: NaiveDate) -> SuggestedBucket {
    let status = task.status();
    if matches!(status, TaskStatus::Backlog)
        || (!status.is_completed() && is_urgent_soon(task, today))
    {
        SuggestedBucket::Backlog
    } else {
        SuggestedBucket::ByStatus
    }
}

/// Classifies a task's urgency.
#[must_use]
pub fn triage_bucket(task: &Task, today: NaiveDate) -> TriageBucket {
    if is_overdue(task, today) {
        TriageBucket::Overdue
    } else if !task.status().is_completed() && is_urgent_soon(task, today) {
        TriageBucket::UrgentSoon
    } else {
        TriageBucket::Normal
    }
}

/// Returns the advisory warning for moving a task to `proposed`.
#[must_use]
pub fn move_status_warning(task: &Task, proposed: &TaskStatus, today: NaiveDate) -> MoveWarning {
    if matches!(proposed, TaskStatus::Backlog) {
        return MoveWarning::None;
    }

    match days_until_due(task, today) {
        Some(days) if days < 0 => MoveWarning::ErrorOverdue,
        Some(days) if days <= URGENT_WINDOW_DAYS => MoveWarning::WarnUrgent,
        _ => MoveWarning::None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};
    use proptest::prelude::*;

    use super::{
        MoveWarning, SuggestedBucket, TriageBucket, days_until_due, is_overdue, is_urgent_soon,
        move_status_warning, suggested_bucket, triage_bucket,
    };
    use crate::task::{Task, TaskStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap_or_default()
    }

    fn due_in(status: TaskStatus, days: i64) -> Task {
        let due_date = if days >= 0 {
            today().checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            today().checked_sub_days(Days::new(days.unsigned_abs()))
        };

        Task::new("task", status).with_due_date(due_date.unwrap_or_default())
    }

    #[test]
    fn days_until_due_counts_calendar_days() {
        assert_eq!(days_until_due(&due_in(TaskStatus::Todo, 0), today()), Some(0));
        assert_eq!(days_until_due(&due_in(TaskStatus::Todo, 1), today()), Some(1));
        assert_eq!(days_until_due(&due_in(TaskStatus::Todo, -3), today()), Some(-3));
        assert_eq!(days_until_due(&Task::new("t", TaskStatus::Todo), today()), None);
    }

    #[test]
    fn days_until_due_crosses_month_and_year_boundaries() {
        let task = Task::new("t", TaskStatus::Todo)
            .with_due_date(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap_or_default());
        let new_years_eve = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap_or_default();
        assert_eq!(days_until_due(&task, new_years_eve), Some(1));
    }

    #[test]
    fn completed_task_due_yesterday_is_not_overdue() {
        let task = due_in(TaskStatus::Completed, -1);
        assert!(!is_overdue(&task, today()));
        assert_eq!(suggested_bucket(&task, today()), SuggestedBucket::ByStatus);
        assert_eq!(triage_bucket(&task, today()), TriageBucket::Normal);
    }

    #[test]
    fn todo_due_today_is_suggested_for_backlog() {
        let task = due_in(TaskStatus::Todo, 0);
        assert_eq!(days_until_due(&task, today()), Some(0));
        assert!(is_urgent_soon(&task, today()));
        assert!(!is_overdue(&task, today()));
        assert_eq!(suggested_bucket(&task, today()), SuggestedBucket::Backlog);
        assert_eq!(triage_bucket(&task, today()), TriageBucket::UrgentSoon);
    }

    #[test]
    fn overdue_review_task_is_pulled_into_backlog() {
        let task = due_in(TaskStatus::Review, -4);
        assert!(is_overdue(&task, today()));
        assert_eq!(suggested_bucket(&task, today()), SuggestedBucket::Backlog);
        assert_eq!(triage_bucket(&task, today()), TriageBucket::Overdue);
    }

    #[test]
    fn task_due_in_two_days_stays_in_its_column() {
        let task = due_in(TaskStatus::InProgress, 2);
        assert!(!is_urgent_soon(&task, today()));
        assert_eq!(suggested_bucket(&task, today()), SuggestedBucket::ByStatus);
        assert_eq!(triage_bucket(&task, today()), TriageBucket::Normal);
    }

    #[test]
    fn task_without_due_date_is_never_urgent() {
        for status in TaskStatus::known() {
            let task = Task::new("t", status.clone());
            assert!(!is_overdue(&task, today()));
            assert!(!is_urgent_soon(&task, today()));
            assert_eq!(triage_bucket(&task, today()), TriageBucket::Normal);
        }

        let backlog = Task::new("t", TaskStatus::Backlog);
        assert_eq!(suggested_bucket(&backlog, today()), SuggestedBucket::Backlog);
        let todo = Task::new("t", TaskStatus::Todo);
        assert_eq!(suggested_bucket(&todo, today()), SuggestedBucket::ByStatus);
    }

    #[test]
    fn completed_task_is_urgent_soon_but_not_backlog() {
        let task = due_in(TaskStatus::Completed, 0);
        assert!(is_urgent_soon(&task, today()));
        assert_eq!(suggested_bucket(&task, today()), SuggestedBucket::ByStatus);
    }

    #[test]
    fn move_warnings_follow_due_distance() {
        let todo = TaskStatus::Todo;
        assert_eq!(
            move_status_warning(&due_in(TaskStatus::Backlog, -1), &todo, today()),
            MoveWarning::ErrorOverdue
        );
        assert_eq!(
            move_status_warning(&due_in(TaskStatus::Backlog, 0), &todo, today()),
            MoveWarning::WarnUrgent
        );
        assert_eq!(
            move_status_warning(&due_in(TaskStatus::Backlog, 1), &todo, today()),
            MoveWarning::WarnUrgent
        );
        assert_eq!(
            move_status_warning(&due_in(TaskStatus::Backlog, 5), &todo, today()),
            MoveWarning::None
        );
        assert_eq!(
            move_status_warning(&Task::new("t", TaskStatus::Backlog), &todo, today()),
            MoveWarning::None
        );
    }

    #[test]
    fn moving_into_backlog_never_warns() {
        let task = due_in(TaskStatus::Todo, -10);
        assert_eq!(
            move_status_warning(&task, &TaskStatus::Backlog, today()),
            MoveWarning::None
        );
    }

    #[test]
    fn wire_values_match_serde_names() {
        let encoded = serde_json::to_string(&TriageBucket::UrgentSoon).unwrap_or_default();
        assert_eq!(encoded, format!("\"{}\"", TriageBucket::UrgentSoon.as_str()));
        let encoded = serde_json::to_string(&MoveWarning::ErrorOverdue).unwrap_or_default();
        assert_eq!(encoded, format!("\"{}\"", MoveWarning::ErrorOverdue.as_str()));
        assert_eq!(SuggestedBucket::ByStatus.as_str(), "by-status");
    }

    proptest! {
        #[test]
        fn completed_tasks_are_never_overdue(offset in -400_i64..400) {
            let task = due_in(TaskStatus::Completed, offset);
            prop_assert!(!is_overdue(&task, today()));
            prop_assert_eq!(suggested_bucket(&task, today()), SuggestedBucket::ByStatus);
        }

        #[test]
        fn overdue_implies_urgent_soon(offset in -400_i64..400) {
            let task = due_in(TaskStatus::Todo, offset);
            if is_overdue(&task, today()) {
                prop_assert!(is_urgent_soon(&task, today()));
                prop_assert_eq!(suggested_bucket(&task, today()), SuggestedBucket::Backlog);
            }
        }
    }
}
