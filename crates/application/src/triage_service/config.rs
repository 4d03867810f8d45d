use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use workpax_core::{AppError, AppResult};

/// Environment variable selecting the calendar zone.
pub const CALENDAR_ZONE_ENV: &str = "WORKPAX_CALENDAR_ZONE";

const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Time zone whose midnight splits calendar days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CalendarZone {
    /// The host's local time zone.
    #[default]
    Local,
    /// Coordinated universal time.
    Utc,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl CalendarZone {
    /// Truncates an instant to the calendar day it falls on in this zone.
    #[must_use]
    pub fn calendar_day(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Local => instant.with_timezone(&Local).date_naive(),
            Self::Utc => instant.date_naive(),
            Self::Fixed(offset) => instant.with_timezone(offset).date_naive(),
        }
    }

    /// Parses a due date sent by the task API.
    ///
    /// Plain `YYYY-MM-DD` values are taken as is. RFC3339 timestamps are
    /// moved into this zone before the time of day is dropped. Timestamps
    /// without an offset are already wall-clock time in this zone.
    pub fn parse_due_date(&self, value: &str) -> AppResult<NaiveDate> {
        let value = value.trim();
        if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Ok(day);
        }
        for format in NAIVE_TIMESTAMP_FORMATS {
            if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(timestamp.date());
            }
        }

        DateTime::parse_from_rfc3339(value)
            .map(|instant| self.calendar_day(instant.with_timezone(&Utc)))
            .map_err(|error| AppError::Validation(format!("invalid due date '{value}': {error}")))
    }
}

impl FromStr for CalendarZone {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
            return Ok(Self::Utc);
        }

        parse_fixed_offset(trimmed).map(Self::Fixed).ok_or_else(|| {
            AppError::Validation(format!(
                "{CALENDAR_ZONE_ENV} must be 'local', 'utc' or an offset like '+05:30', got '{value}'"
            ))
        })
    }
}

/// Settings for triage passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriageConfig {
    /// Zone used to truncate "now" and timestamped due dates.
    pub calendar_zone: CalendarZone,
}

impl TriageConfig {
    /// Creates a config for one calendar zone.
    #[must_use]
    pub fn new(calendar_zone: CalendarZone) -> Self {
        Self { calendar_zone }
    }

    /// Loads the config from process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_zone_value(std::env::var(CALENDAR_ZONE_ENV).ok().as_deref())
    }

    /// Builds the config from an optional raw zone value.
    ///
    /// Missing or blank values select the local zone.
    pub fn from_zone_value(value: Option<&str>) -> AppResult<Self> {
        let calendar_zone = match value.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => CalendarZone::from_str(raw)?,
            None => CalendarZone::Local,
        };

        Ok(Self { calendar_zone })
    }
}

fn parse_fixed_offset(value: &str) -> Option<FixedOffset> {
    let (sign, rest) = if let Some(rest) = value.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = value.strip_prefix('-') {
        (-1, rest)
    } else {
        return None;
    };

    let (hours, minutes) = rest.split_once(':')?;
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|byte| byte.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return None;
    }

    let hours = hours.parse::<i32>().ok()?;
    let minutes = minutes.parse::<i32>().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
