use chrono::{DateTime, Utc};

/// Flat view of one game, ready to become a VEVENT.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub id: i64,
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
    pub summary: String,
    pub description: String,
    pub location: String,
}
