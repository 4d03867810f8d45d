use std::sync::Arc;

use chrono::{Days, FixedOffset, NaiveDate, TimeZone, Utc};
use workpax_domain::{
    MoveWarning, Project, ProjectId, SuggestedBucket, Task, TaskPriority, TaskStatus, TriageBucket,
    UserId,
};

use super::{CalendarZone, StatusMovePlan, TriageConfig, TriagePass, TriageService};
use crate::triage_ports::FixedClock;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap_or_default()
}

fn pass() -> TriagePass {
    TriagePass::on_day(today())
}

fn due_in(title: &str, status: TaskStatus, days: i64) -> Task {
    let due_date = if days >= 0 {
        today().checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        today().checked_sub_days(Days::new(days.unsigned_abs()))
    };

    Task::new(title, status).with_due_date(due_date.unwrap_or_default())
}

fn project(id: &str, tasks: Vec<Task>) -> Project {
    let project_id = ProjectId::new(id).unwrap_or_else(|_| panic!("project id should be valid"));
    Project::new(project_id, format!("Project {id}"), None, tasks)
}

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap_or_else(|_| panic!("user id should be valid"))
}

fn titles(tasks: impl IntoIterator<Item = Task>) -> Vec<String> {
    tasks.into_iter().map(|task| task.title().to_owned()).collect()
}

#[test]
fn pass_truncates_now_in_configured_zone() {
    let Some(instant) = Utc.with_ymd_and_hms(2026, 3, 10, 23, 15, 0).single() else {
        panic!("instant should be valid");
    };
    let clock = Arc::new(FixedClock::new(instant));

    let utc = TriageService::new(TriageConfig::new(CalendarZone::Utc), clock.clone());
    assert_eq!(utc.pass().today(), today());

    let Some(plus_two) = FixedOffset::east_opt(2 * 3600) else {
        panic!("offset should be valid");
    };
    let eastern = TriageService::new(TriageConfig::new(CalendarZone::Fixed(plus_two)), clock);
    assert_eq!(
        eastern.pass().today(),
        NaiveDate::from_ymd_opt(2026, 3, 11).unwrap_or_default()
    );
}

#[test]
fn one_pass_classifies_a_batch_against_one_day() {
    let Some(instant) = Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).single() else {
        panic!("instant should be valid");
    };
    let service = TriageService::with_system_clock(TriageConfig::new(CalendarZone::Utc));
    let pass = service.pass_at(instant);

    let tasks = [
        due_in("yesterday", TaskStatus::Todo, -1),
        due_in("today", TaskStatus::Todo, 0),
        due_in("next week", TaskStatus::Todo, 7),
    ];
    let buckets: Vec<TriageBucket> = tasks.iter().map(|task| pass.triage_bucket(task)).collect();
    assert_eq!(
        buckets,
        vec![
            TriageBucket::Overdue,
            TriageBucket::UrgentSoon,
            TriageBucket::Normal
        ]
    );
}

#[test]
fn service_parses_due_dates_in_its_zone() {
    let service = TriageService::with_system_clock(TriageConfig::new(CalendarZone::Utc));
    assert_eq!(
        service.parse_due_date("2026-03-10T22:00:00Z").ok(),
        Some(today())
    );
    assert_eq!(service.config().calendar_zone, CalendarZone::Utc);
}

#[test]
fn pass_exposes_the_classifier() {
    let pass = pass();
    let task = due_in("today", TaskStatus::Todo, 0);
    assert_eq!(pass.days_until_due(&task), Some(0));
    assert!(pass.is_urgent_soon(&task));
    assert!(!pass.is_overdue(&task));
    assert_eq!(pass.suggested_bucket(&task), SuggestedBucket::Backlog);
}

#[test]
fn board_places_each_task_once() {
    let tasks = vec![
        Task::new("parked", TaskStatus::Backlog),
        due_in("late", TaskStatus::InProgress, -2),
        due_in("tomorrow", TaskStatus::Review, 1),
        due_in("later", TaskStatus::Review, 4),
        due_in("done late", TaskStatus::Completed, -5),
        Task::new("stuck", TaskStatus::Blocked),
        Task::new("odd", TaskStatus::from("archived")),
        due_in("odd late", TaskStatus::from("archived"), -1),
        Task::new("fresh", TaskStatus::Todo),
    ];

    let board = pass().board(&tasks);
    let column = |status: TaskStatus| {
        board
            .column(&status)
            .map(|column| titles(column.cards.iter().map(|card| card.task.clone())))
            .unwrap_or_default()
    };

    assert_eq!(board.columns.len(), 6);
    assert_eq!(column(TaskStatus::Backlog), vec!["parked", "late", "tomorrow"]);
    assert_eq!(column(TaskStatus::Todo), vec!["fresh"]);
    assert!(column(TaskStatus::InProgress).is_empty());
    assert_eq!(column(TaskStatus::Review), vec!["later"]);
    assert_eq!(column(TaskStatus::Completed), vec!["done late"]);
    assert_eq!(column(TaskStatus::Blocked), vec!["stuck"]);
    assert_eq!(titles(board.unplaced.clone()), vec!["odd", "odd late"]);

    let placed: usize = board.columns.iter().map(|column| column.cards.len()).sum();
    assert_eq!(placed + board.unplaced.len(), tasks.len());
}

#[test]
fn board_columns_use_display_titles() {
    let board = pass().board(&[]);
    let headings: Vec<&str> = board.columns.iter().map(|column| column.title).collect();
    assert_eq!(
        headings,
        vec!["Backlog", "To Do", "In Progress", "Review", "Completed", "Blocked"]
    );
}

#[test]
fn board_cards_carry_triage() {
    let board = pass().board(&[due_in("late", TaskStatus::Todo, -3)]);
    let card = board
        .column(&TaskStatus::Backlog)
        .and_then(|column| column.cards.first());
    assert_eq!(card.map(|card| card.triage), Some(TriageBucket::Overdue));
    assert_eq!(card.and_then(|card| card.days_until_due), Some(-3));
}

#[test]
fn status_moves_warn_but_never_block() {
    let pass = pass();

    let overdue = due_in("late", TaskStatus::Backlog, -1);
    assert_eq!(
        pass.plan_status_move(&overdue, &TaskStatus::Todo).ok(),
        Some(StatusMovePlan::Move {
            to: TaskStatus::Todo,
            warning: MoveWarning::ErrorOverdue,
        })
    );

    let urgent = due_in("today", TaskStatus::Backlog, 0);
    assert_eq!(
        pass.plan_status_move(&urgent, &TaskStatus::InProgress).ok(),
        Some(StatusMovePlan::Move {
            to: TaskStatus::InProgress,
            warning: MoveWarning::WarnUrgent,
        })
    );

    let relaxed = due_in("later", TaskStatus::Backlog, 5);
    assert_eq!(
        pass.plan_status_move(&relaxed, &TaskStatus::Todo).ok(),
        Some(StatusMovePlan::Move {
            to: TaskStatus::Todo,
            warning: MoveWarning::None,
        })
    );

    let back = due_in("late", TaskStatus::Todo, -1);
    assert_eq!(
        pass.plan_status_move(&back, &TaskStatus::Backlog).ok(),
        Some(StatusMovePlan::Move {
            to: TaskStatus::Backlog,
            warning: MoveWarning::None,
        })
    );
}

#[test]
fn status_move_to_same_status_is_unchanged() {
    let task = due_in("late", TaskStatus::Review, -1);
    assert_eq!(
        pass().plan_status_move(&task, &TaskStatus::Review).ok(),
        Some(StatusMovePlan::Unchanged)
    );
}

#[test]
fn status_move_to_unknown_column_is_rejected() {
    let task = Task::new("t", TaskStatus::Todo);
    assert!(
        pass()
            .plan_status_move(&task, &TaskStatus::from("archived"))
            .is_err()
    );
}

#[test]
fn backlog_lists_only_projects_needing_attention() {
    let projects = vec![
        project(
            "p-1",
            vec![
                Task::new("parked", TaskStatus::Backlog),
                due_in("late", TaskStatus::Todo, -1),
                due_in("done", TaskStatus::Completed, -1),
                Task::new("fine", TaskStatus::Todo),
            ],
        ),
        project("p-2", vec![due_in("later", TaskStatus::Todo, 9)]),
    ];

    let backlog = pass().backlog(&projects);
    assert_eq!(backlog.len(), 1);
    assert_eq!(backlog[0].project_id.as_str(), "p-1");
    assert_eq!(
        titles(backlog[0].tasks.iter().map(|card| card.task.clone())),
        vec!["parked", "late"]
    );
    assert!(!backlog[0].tasks[0].overdue);
    assert!(backlog[0].tasks[1].overdue);
}

#[test]
fn project_report_combines_stats_and_progress() {
    let report = pass().project_report(&project(
        "p-1",
        vec![
            Task::new("a", TaskStatus::Completed),
            due_in("b", TaskStatus::Review, -1),
            due_in("c", TaskStatus::InProgress, 0),
            Task::new("d", TaskStatus::Blocked),
        ],
    ));

    assert_eq!(report.stats.total, 4);
    assert_eq!(report.stats.completed, 1);
    assert!((report.completion_percent - 36.25).abs() < 1e-9);
    assert_eq!(report.breakdown.len(), 3);
    assert_eq!(report.overdue, 1);
    assert_eq!(report.urgent_soon, 1);
}

#[test]
fn empty_project_report_is_zero() {
    let report = pass().project_report(&project("p-0", Vec::new()));
    assert_eq!(report.completion_percent, 0.0);
    assert_eq!(report.stats.total, 0);
    assert!(report.breakdown.is_empty());
}

#[test]
fn your_work_filters_by_assignee() {
    let projects = vec![
        project(
            "p-1",
            vec![
                Task::new("mine done", TaskStatus::Completed).with_assignee(user("u-1")),
                Task::new("theirs", TaskStatus::Todo).with_assignee(user("u-2")),
                Task::new("unassigned", TaskStatus::Todo),
            ],
        ),
        project(
            "p-2",
            vec![due_in("mine late", TaskStatus::InProgress, -1).with_assignee(user("u-1"))],
        ),
    ];

    let work = pass().your_work(&projects, "u-1");
    assert_eq!(work.summary.total, 2);
    assert_eq!(work.summary.completed, 1);
    assert_eq!(work.summary.in_progress, 1);
    assert_eq!(work.summary.completion_rate, 50);
    assert_eq!(
        work.cards.iter().map(|card| card.triage).collect::<Vec<_>>(),
        vec![TriageBucket::Normal, TriageBucket::Overdue]
    );
}

#[test]
fn roadmap_groups_by_priority_most_pressing_first() {
    let project = project(
        "p-1",
        vec![
            Task::new("docs", TaskStatus::Todo).with_priority(TaskPriority::Low),
            due_in("hotfix", TaskStatus::InProgress, 0).with_priority(TaskPriority::Urgent),
            Task::new("refactor", TaskStatus::Backlog),
            Task::new("triage", TaskStatus::Todo).with_priority(TaskPriority::from("critical")),
            Task::new("release", TaskStatus::Review).with_priority(TaskPriority::Urgent),
        ],
    );

    let roadmap = pass().roadmap(&project);
    let groups: Vec<(&str, Vec<String>)> = roadmap
        .groups
        .iter()
        .map(|group| {
            let cards = group.cards.iter().map(|card| card.task.clone());
            (group.priority.as_str(), titles(cards))
        })
        .collect();

    assert_eq!(
        groups,
        vec![
            ("urgent", vec!["hotfix".to_owned(), "release".to_owned()]),
            ("medium", vec!["refactor".to_owned()]),
            ("low", vec!["docs".to_owned()]),
        ]
    );
    assert_eq!(roadmap.groups[0].cards[0].triage, TriageBucket::UrgentSoon);
    assert_eq!(
        titles(roadmap.unprioritized.iter().map(|card| card.task.clone())),
        vec!["triage".to_owned()]
    );
}

#[test]
fn empty_project_has_empty_roadmap() {
    let roadmap = pass().roadmap(&project("p-2", Vec::new()));
    assert!(roadmap.groups.is_empty());
    assert!(roadmap.unprioritized.is_empty());
    assert_eq!(roadmap.name, "Project p-2");
}
