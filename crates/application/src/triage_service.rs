use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;
use workpax_core::{AppError, AppResult};
use workpax_domain::{
    MoveWarning, Project, SuggestedBucket, Task, TaskStatus, TriageBucket, days_until_due,
    is_overdue, is_urgent_soon, move_status_warning, suggested_bucket, triage_bucket,
};

use crate::triage_ports::{Clock, SystemClock};

mod board;
mod config;
mod roadmap;
mod views;

#[cfg(test)]
mod tests;

pub use board::{BoardCard, BoardColumn, BoardView, StatusMovePlan};
pub use config::{CALENDAR_ZONE_ENV, CalendarZone, TriageConfig};
pub use roadmap::{PriorityGroup, RoadmapView};
pub use views::{BacklogCard, BacklogProject, ProjectReport, YourWork};

/// Application service that classifies task snapshots for display.
#[derive(Clone)]
pub struct TriageService {
    config: TriageConfig,
    clock: Arc<dyn Clock>,
}

impl TriageService {
    /// Creates a triage service from config and a clock implementation.
    #[must_use]
    pub fn new(config: TriageConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// Creates a triage service that reads the system clock.
    #[must_use]
    pub fn with_system_clock(config: TriageConfig) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }

    /// Returns the service config.
    #[must_use]
    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Starts a pass at the clock's current instant.
    #[must_use]
    pub fn pass(&self) -> TriagePass {
        self.pass_at(self.clock.now())
    }

    /// Starts a pass at `now`.
    ///
    /// Every classification made through the returned pass uses the same
    /// calendar day, so one batch is bucketed consistently.
    #[must_use]
    pub fn pass_at(&self, now: DateTime<Utc>) -> TriagePass {
        let today = self.config.calendar_zone.calendar_day(now);
        debug!(%now, %today, "starting triage pass");
        TriagePass::on_day(today)
    }

    /// Parses a due date from the task API in the configured zone.
    pub fn parse_due_date(&self, value: &str) -> AppResult<NaiveDate> {
        self.config.calendar_zone.parse_due_date(value)
    }
}

/// Classifications against one fixed calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriagePass {
    today: NaiveDate,
}

impl TriagePass {
    /// Creates a pass for an already-truncated calendar day.
    #[must_use]
    pub fn on_day(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Returns the calendar day this pass classifies against.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Whole days until the task is due, negative when overdue.
    #[must_use]
    pub fn days_until_due(&self, task: &Task) -> Option<i64> {
        days_until_due(task, self.today)
    }

    /// Returns whether the task is overdue and not completed.
    #[must_use]
    pub fn is_overdue(&self, task: &Task) -> bool {
        is_overdue(task, self.today)
    }

    /// Returns whether the task is due today, tomorrow, or earlier.
    #[must_use]
    pub fn is_urgent_soon(&self, task: &Task) -> bool {
        is_urgent_soon(task, self.today)
    }

    /// Suggests the display bucket for the task.
    #[must_use]
    pub fn suggested_bucket(&self, task: &Task) -> SuggestedBucket {
        suggested_bucket(task, self.today)
    }

    /// Classifies the task's urgency.
    #[must_use]
    pub fn triage_bucket(&self, task: &Task) -> TriageBucket {
        triage_bucket(task, self.today)
    }

    /// Returns the advisory warning for moving the task to `proposed`.
    #[must_use]
    pub fn move_status_warning(&self, task: &Task, proposed: &TaskStatus) -> MoveWarning {
        move_status_warning(task, proposed, self.today)
    }

    /// Plans a drag of the task onto the `proposed` board column.
    ///
    /// Only the six known statuses are columns. The returned warning is
    /// advisory and never cancels the move.
    pub fn plan_status_move(
        &self,
        task: &Task,
        proposed: &TaskStatus,
    ) -> AppResult<StatusMovePlan> {
        if !proposed.is_recognized() {
            return Err(AppError::Validation(format!(
                "'{proposed}' is not a board column"
            )));
        }

        if task.status() == proposed {
            return Ok(StatusMovePlan::Unchanged);
        }

        let warning = self.move_status_warning(task, proposed);
        if warning != MoveWarning::None {
            debug!(
                task = task.title(),
                from = %task.status(),
                to = %proposed,
                ?warning,
                "status move raises an advisory warning"
            );
        }

        Ok(StatusMovePlan::Move {
            to: proposed.clone(),
            warning,
        })
    }

    /// Returns the projects that have tasks needing backlog attention.
    #[must_use]
    pub fn backlog(&self, projects: &[Project]) -> Vec<BacklogProject> {
        views::backlog(self, projects)
    }
}
