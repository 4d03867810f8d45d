use std::env;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing_subscriber::EnvFilter;
use workpax_application::TriageConfig;
use workpax_core::AppError;

const SNAPSHOT_PATH_ENV: &str = "WORKPAX_SNAPSHOT_PATH";
const REPORT_PRETTY_ENV: &str = "WORKPAX_REPORT_PRETTY";
const NOW_ENV: &str = "WORKPAX_NOW";

/// Where the snapshot is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub snapshot_source: SnapshotSource,
    pub pretty: bool,
    pub now: Option<DateTime<Utc>>,
    pub triage: TriageConfig,
}

impl ReportConfig {
    pub fn load() -> Result<Self, AppError> {
        let snapshot_source = snapshot_source(
            env::args()
                .nth(1)
                .or_else(|| env::var(SNAPSHOT_PATH_ENV).ok()),
        );
        let pretty = env::var(REPORT_PRETTY_ENV)
            .unwrap_or_else(|_| "false".to_owned())
            .eq_ignore_ascii_case("true");
        let now = parse_now(env::var(NOW_ENV).ok())?;

        Ok(Self {
            snapshot_source,
            pretty,
            now,
            triage: TriageConfig::from_env()?,
        })
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn snapshot_source(value: Option<String>) -> SnapshotSource {
    match value.filter(|value| !value.trim().is_empty()) {
        Some(path) if path != "-" => SnapshotSource::File(PathBuf::from(path)),
        _ => SnapshotSource::Stdin,
    }
}

fn parse_now(value: Option<String>) -> Result<Option<DateTime<Utc>>, AppError> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(|value| {
            DateTime::parse_from_rfc3339(value.trim())
                .map(|instant| instant.with_timezone(&Utc))
                .map_err(|error| AppError::Validation(format!("invalid {NOW_ENV}: {error}")))
        })
        .transpose()
}
