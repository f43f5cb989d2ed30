use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike, Property};
use tracing::debug;

use crate::config::SeasonConfig;
use crate::model::event::NormalizedEvent;
use crate::time_resolver::ICS_UTC_FORMAT;

/// Renders normalized games into a publishable VCALENDAR.
#[derive(Debug, Clone)]
pub struct CalendarRenderer {
    season: i32,
    product_id: String,
    calendar_name: String,
}

impl CalendarRenderer {
    pub fn new(config: &SeasonConfig) -> Self {
        Self {
            season: config.season,
            product_id: config.product_id(),
            calendar_name: config.calendar_name(),
        }
    }

    /// Build the ICS text. `dtstamp` is the render time, stamped on every event.
    pub fn render(&self, events: &[NormalizedEvent], dtstamp: DateTime<Utc>) -> String {
        let mut cal = Calendar::new();
        cal.append_property(Property::new("METHOD", "PUBLISH"));
        cal.append_property(Property::new("X-WR-CALNAME", &self.calendar_name));
        cal.append_property(Property::new("X-WR-TIMEZONE", "UTC"));
        cal.append_property(Property::new("X-PUBLISHED-TTL", "PT1H"));

        let stamp = dtstamp.format(ICS_UTC_FORMAT).to_string();
        for event in events {
            cal.push(self.vevent(event, &stamp));
        }
        debug!(events = events.len(), "Rendered calendar");

        self.rewrite_product_id(&cal.done().to_string())
    }

    fn vevent(&self, event: &NormalizedEvent, stamp: &str) -> icalendar::Event {
        let mut vevent = icalendar::Event::new();
        vevent.uid(&format!("mlb-{}-{}@mlb.com", self.season, event.id));
        vevent.add_property("DTSTAMP", stamp);
        vevent.add_property("DTSTART", event.start_utc.format(ICS_UTC_FORMAT).to_string());
        vevent.add_property("DTEND", event.end_utc.format(ICS_UTC_FORMAT).to_string());
        vevent.summary(&event.summary);
        vevent.location(&event.location);
        vevent.description(&event.description);
        vevent.add_property("STATUS", "CONFIRMED");
        vevent.done()
    }

    /// The icalendar crate always writes its own PRODID; swap in ours.
    fn rewrite_product_id(&self, ics: &str) -> String {
        let mut out = String::with_capacity(ics.len());
        for line in ics.lines() {
            if line.starts_with("PRODID:") {
                out.push_str("PRODID:");
                out.push_str(&self.product_id);
            } else {
                out.push_str(line);
            }
            out.push_str("\r\n");
        }
        out
    }
}
