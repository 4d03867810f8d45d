//! Application services and ports.

#![forbid(unsafe_code)]

mod access_policy;
mod triage_ports;
mod triage_service;

pub use access_policy::{AccessContext, AccessPolicy};
pub use triage_ports::{Clock, FixedClock, SystemClock};
pub use triage_service::{
    BacklogCard, BacklogProject, BoardCard, BoardColumn, BoardView, CALENDAR_ZONE_ENV,
    CalendarZone, PriorityGroup, ProjectReport, RoadmapView, StatusMovePlan, TriageConfig,
    TriagePass, TriageService, YourWork,
};
