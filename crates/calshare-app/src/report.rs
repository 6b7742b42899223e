//! Human-readable listing of a calendar's events.

use std::fmt;

use calshare_ical::ical::core::names::{DTEND, DTSTART};
use calshare_ical::ical::core::parse_utc;
use calshare_ical::{Calendar, Event};

const MISSING: &str = "?";

/// Lists every event: title, time range, organizer, and each attendee with their
/// participation status.
pub struct EventListing<'a>(pub &'a Calendar);

impl fmt::Display for EventListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in self.0.events() {
            write_event(f, event)?;
        }
        Ok(())
    }
}

fn write_event(f: &mut fmt::Formatter<'_>, event: &Event) -> fmt::Result {
    let summary = event.summary().unwrap_or_else(|| "(untitled)".to_string());
    writeln!(f, "{summary}")?;
    writeln!(f, "  when: {} - {}", time(event, DTSTART), time(event, DTEND))?;

    if let Some(organizer) = event.organizer() {
        writeln!(f, "  organizer: {} <{}>", organizer.name(), organizer.email())?;
    }
    for attendee in event.attendees() {
        let status = attendee.participation_status();
        match attendee.name() {
            Some(name) => writeln!(f, "  attendee: {name} <{}> ({status})", attendee.email())?,
            None => writeln!(f, "  attendee: {} ({status})", attendee.email())?,
        }
    }
    Ok(())
}

fn time(event: &Event, name: &str) -> String {
    event.get_property(name).and_then(parse_utc).map_or_else(
        || MISSING.to_string(),
        |instant| instant.format("%Y-%m-%d %H:%M UTC").to_string(),
    )
}
