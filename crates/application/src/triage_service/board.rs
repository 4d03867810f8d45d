use serde::Serialize;
use workpax_domain::{MoveWarning, SuggestedBucket, Task, TaskStatus, TriageBucket};

use super::TriagePass;

/// Outcome of dropping a task on a board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StatusMovePlan {
    /// The task is already in that status.
    Unchanged,
    /// Send the status update; show `warning` if it is not `None`.
    Move {
        /// Target status.
        to: TaskStatus,
        /// Advisory warning to surface alongside the move.
        warning: MoveWarning,
    },
}

/// One task placed on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardCard {
    /// Task snapshot.
    pub task: Task,
    /// Whole days until due, negative when overdue.
    pub days_until_due: Option<i64>,
    /// Urgency tier.
    pub triage: TriageBucket,
}

/// One board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    /// Status the column stands for.
    pub status: TaskStatus,
    /// Column heading.
    pub title: &'static str,
    /// Cards in input order.
    pub cards: Vec<BoardCard>,
}

/// Kanban projection of a task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// The six status columns in board order.
    pub columns: Vec<BoardColumn>,
    /// Tasks whose status names no column.
    pub unplaced: Vec<Task>,
}

impl BoardView {
    /// Returns the column for a status.
    #[must_use]
    pub fn column(&self, status: &TaskStatus) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| &column.status == status)
    }
}

impl TriagePass {
    /// Places every task in exactly one column.
    ///
    /// Tasks suggested for the backlog go to the backlog column; the rest go
    /// to the column named by their status. Tasks with an unrecognised
    /// status are never placed, even when urgent.
    #[must_use]
    pub fn board(&self, tasks: &[Task]) -> BoardView {
        let mut columns: Vec<BoardColumn> = TaskStatus::known()
            .iter()
            .map(|status| BoardColumn {
                status: status.clone(),
                title: column_title(status),
                cards: Vec::new(),
            })
            .collect();
        let mut unplaced = Vec::new();
        let backlog = TaskStatus::Backlog;

        for task in tasks {
            if !task.status().is_recognized() {
                unplaced.push(task.clone());
                continue;
            }

            let target = match self.suggested_bucket(task) {
                SuggestedBucket::Backlog => &backlog,
                SuggestedBucket::ByStatus => task.status(),
            };

            match columns.iter_mut().find(|column| &column.status == target) {
                Some(column) => column.cards.push(self.card(task)),
                None => unplaced.push(task.clone()),
            }
        }

        BoardView { columns, unplaced }
    }

    pub(super) fn card(&self, task: &Task) -> BoardCard {
        BoardCard {
            task: task.clone(),
            days_until_due: self.days_until_due(task),
            triage: self.triage_bucket(task),
        }
    }
}

fn column_title(status: &TaskStatus) -> &'static str {
    match status {
        TaskStatus::Backlog => "Backlog",
        TaskStatus::Todo => "To Do",
        TaskStatus::InProgress => "In Progress",
        TaskStatus::Review => "Review",
        TaskStatus::Completed => "Completed",
        TaskStatus::Blocked => "Blocked",
        TaskStatus::Unrecognized(_) => "Other",
    }
}
