//! Turns the schedule's `gameDate` strings into UTC event slots.
//!
//! The upstream feed is not consistent about timestamp shape, and it encodes
//! "start time not known yet" in a few indirect ways. Each accepted shape is a
//! [`Strategy`], tried in order; the "not known yet" signals are the
//! [`is_placeholder_name`] and [`is_unconfirmed_minute`] predicates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use tracing::debug;

use crate::config::ResolverConfig;
use crate::error::SkipReason;

/// Substrings that mark a team slot as undecided ("TBD", "Winner of ...", "Higher Seed").
pub const PLACEHOLDER_MARKERS: [&str; 4] = ["TBD", "Winner", "Lower", "Higher"];

/// Minute value upstream uses for start times that have not been announced.
pub const UNCONFIRMED_MINUTE: u32 = 33;

/// iCalendar UTC date-time form.
pub const ICS_UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSlot {
    pub fn start_ics(&self) -> String {
        self.start.format(ICS_UTC_FORMAT).to_string()
    }

    pub fn end_ics(&self) -> String {
        self.end.format(ICS_UTC_FORMAT).to_string()
    }
}

/// What a strategy could extract from a raw timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedStart {
    /// A real, announced start instant.
    Exact(DateTime<Utc>),
    /// An instant upstream flagged as not yet confirmed; only its date is meaningful.
    Unconfirmed(DateTime<Utc>),
    /// A civil date with no time of day.
    DateOnly(NaiveDate),
}

/// Accepts a raw timestamp or declines with `None`.
pub type Strategy = fn(&str) -> Option<ParsedStart>;

/// Timestamp shapes in the order they are tried.
pub const STRATEGIES: [(&str, Strategy); 4] = [
    ("utc_suffixed", parse_utc_suffixed as Strategy),
    ("numeric_offset", parse_numeric_offset as Strategy),
    ("naive_utc", parse_naive_utc as Strategy),
    ("bare_date", parse_bare_date as Strategy),
];

/// True when a team name is a stand-in for a club decided by an earlier series.
pub fn is_placeholder_name(name: &str) -> bool {
    PLACEHOLDER_MARKERS.iter().any(|m| name.contains(m))
}

pub fn is_unconfirmed_minute(dt: &DateTime<Utc>) -> bool {
    dt.minute() == UNCONFIRMED_MINUTE
}

/// `2025-10-15T23:08:00Z`
pub fn parse_utc_suffixed(raw: &str) -> Option<ParsedStart> {
    if !raw.ends_with('Z') {
        return None;
    }
    let dt = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ").map(|n| n.and_utc()))
        .ok()?;
    if is_unconfirmed_minute(&dt) {
        Some(ParsedStart::Unconfirmed(dt))
    } else {
        Some(ParsedStart::Exact(dt))
    }
}

/// `2025-09-30T13:08:00-04:00`
pub fn parse_numeric_offset(raw: &str) -> Option<ParsedStart> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
        .map(|dt| ParsedStart::Exact(dt.with_timezone(&Utc)))
}

/// `2025-09-30T17:08:00`, read as UTC.
pub fn parse_naive_utc(raw: &str) -> Option<ParsedStart> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|pat| NaiveDateTime::parse_from_str(raw, pat).ok())
        .map(|naive| ParsedStart::Exact(naive.and_utc()))
}

/// `2025-09-30`
pub fn parse_bare_date(raw: &str) -> Option<ParsedStart> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(ParsedStart::DateOnly)
}

/// Run the strategies in order and return the first acceptance.
pub fn parse_start(raw: &str) -> Option<(&'static str, ParsedStart)> {
    STRATEGIES
        .iter()
        .find_map(|(name, strategy)| strategy(raw).map(|parsed| (*name, parsed)))
}

#[derive(Debug, Clone, Default)]
pub struct TimeResolver {
    config: ResolverConfig,
}

impl TimeResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Resolve a game's start/end slot.
    ///
    /// Undecided matchups (placeholder team names or the upstream TBD flag)
    /// keep only the date of `raw` and get the placeholder kickoff.
    pub fn resolve(
        &self,
        raw: Option<&str>,
        away_name: &str,
        home_name: &str,
        start_time_tbd: bool,
    ) -> Result<TimeSlot, SkipReason> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(SkipReason::MissingTimestamp)?;
        let (strategy, parsed) =
            parse_start(raw).ok_or_else(|| SkipReason::UnparseableTimestamp(raw.to_string()))?;

        let undecided = is_placeholder_name(away_name) || is_placeholder_name(home_name);
        let start = if undecided || start_time_tbd {
            let date = self.local_date(parsed);
            debug!(raw, %date, undecided, start_time_tbd, "Start not determined; using placeholder kickoff");
            self.placeholder_kickoff(date)?
        } else {
            match parsed {
                ParsedStart::Exact(dt) => dt,
                ParsedStart::Unconfirmed(dt) => {
                    let date = self.local_date(parsed);
                    debug!(raw, %date, minute = dt.minute(), "Unconfirmed start minute; using placeholder kickoff");
                    self.placeholder_kickoff(date)?
                }
                ParsedStart::DateOnly(date) => self.placeholder_kickoff(date)?,
            }
        };
        debug!(raw, strategy, start = %start, "Resolved start time");

        Ok(TimeSlot { start, end: start + self.config.duration })
    }

    /// Civil date in the configured zone. Bare dates are already civil.
    fn local_date(&self, parsed: ParsedStart) -> NaiveDate {
        match parsed {
            ParsedStart::Exact(dt) | ParsedStart::Unconfirmed(dt) => {
                dt.with_timezone(&self.config.zone).date_naive()
            }
            ParsedStart::DateOnly(date) => date,
        }
    }

    /// Placeholder kickoff on `date`, localized (DST aware) and converted to UTC.
    pub fn placeholder_kickoff(&self, date: NaiveDate) -> Result<DateTime<Utc>, SkipReason> {
        let local = date.and_time(self.config.placeholder_kickoff);
        self.config
            .zone
            .from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| SkipReason::NonexistentLocalTime(local.to_string()))
    }
}
