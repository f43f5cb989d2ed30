//! Failure kinds for configuration and the fetch and normalize stages.

use chrono::NaiveDate;
use thiserror::Error;

/// Why the schedule could not be obtained. Callers downgrade these to an empty schedule.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),

    #[error("upstream returned HTTP {0}")]
    Status(u16),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("failed to parse schedule JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single game did not make it into the calendar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("no start timestamp")]
    MissingTimestamp,

    #[error("unparseable start timestamp '{0}'")]
    UnparseableTimestamp(String),

    #[error("placeholder kickoff does not exist in local time on {0}")]
    NonexistentLocalTime(String),

    #[error("malformed game record: {0}")]
    Malformed(String),
}

/// Command-line settings that cannot form a usable run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("start date {start} is after end date {end}")]
    InvertedWindow { start: NaiveDate, end: NaiveDate },
}
