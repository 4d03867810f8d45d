//! Workpax triage report.
//!
//! Reads a workspace snapshot as JSON and prints the triage digest for the
//! signed-in viewer.

#![forbid(unsafe_code)]

mod digest;
mod dto;
mod report_config;

use std::io::{self, Read, Write};
use std::sync::Arc;

use tracing::info;
use workpax_application::{AccessPolicy, Clock, FixedClock, SystemClock, TriageService};
use workpax_core::{AppError, AppResult};

use crate::digest::build_digest;
use crate::dto::SnapshotRequest;
use crate::report_config::{ReportConfig, SnapshotSource, init_tracing};

fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ReportConfig::load()?;
    let clock: Arc<dyn Clock> = match config.now {
        Some(instant) => Arc::new(FixedClock::new(instant)),
        None => Arc::new(SystemClock),
    };
    let service = TriageService::new(config.triage, clock);

    let raw = read_snapshot(&config.snapshot_source)?;
    let request: SnapshotRequest = serde_json::from_str(raw.as_str())
        .map_err(|error| AppError::Validation(format!("invalid snapshot: {error}")))?;
    let snapshot = request.into_snapshot(&service)?;

    let pass = service.pass();
    let digest = build_digest(&snapshot, &AccessPolicy::new(), &pass);

    let encoded = if config.pretty {
        serde_json::to_string_pretty(&digest)
    } else {
        serde_json::to_string(&digest)
    }
    .map_err(|error| AppError::Internal(format!("failed to encode digest: {error}")))?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{encoded}")
        .map_err(|error| AppError::Internal(format!("failed to write digest: {error}")))?;

    info!(
        day = %pass.today(),
        projects = digest.projects.len(),
        backlog_projects = digest.backlog.len(),
        effective_role = %digest.viewer.effective_role,
        "triage digest written"
    );

    Ok(())
}

fn read_snapshot(source: &SnapshotSource) -> AppResult<String> {
    match source {
        SnapshotSource::Stdin => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .map_err(|error| AppError::Internal(format!("failed to read stdin: {error}")))?;
            Ok(raw)
        }
        SnapshotSource::File(path) => std::fs::read_to_string(path).map_err(|error| {
            AppError::Internal(format!(
                "failed to read snapshot '{}': {error}",
                path.display()
            ))
        }),
    }
}
