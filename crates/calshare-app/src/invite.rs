//! Builds shareable invite calendars from event data.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use calshare_core::config::{CalendarConfig, Settings};
use calshare_core::constants::{
    ICALENDAR_VERSION, INVITE_FILE_FALLBACK_PREFIX, MIN_FILE_PREFIX_LENGTH,
};
use calshare_core::error::CoreError;
use calshare_ical::ical::core::names::{DESCRIPTION, LOCATION, METHOD, PRODID, SUMMARY, VERSION};
use calshare_ical::{Calendar, Event, Organizer, ParticipationStatus, UidGenerator};
use chrono::Utc;

use crate::error::AppResult;
use crate::store::write_new_calendar_file;

/// One invitee as given on the command line: `[Name <]email[>][;STATUS]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeSpec {
    pub name: Option<String>,
    pub email: String,
    pub status: ParticipationStatus,
}

impl FromStr for AttendeeSpec {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (address, status) = match s.rsplit_once(';') {
            Some((address, status)) => (address, ParticipationStatus::parse(status)),
            None => (s, ParticipationStatus::NeedsAction),
        };

        let (name, email) = match address.trim().strip_suffix('>') {
            Some(rest) => {
                let (name, email) = rest.rsplit_once('<').ok_or_else(|| {
                    CoreError::InvalidInput(format!("unbalanced angle brackets in {s:?}"))
                })?;
                let name = name.trim();
                ((!name.is_empty()).then(|| name.to_string()), email.trim())
            }
            None => (None, address.trim()),
        };

        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::InvalidInput(format!(
                "attendee {s:?} has no email address"
            )));
        }

        Ok(Self {
            name,
            email: email.to_string(),
            status,
        })
    }
}

/// Event data for one shared invite.
#[derive(Debug, Clone, Default)]
pub struct InviteRequest {
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_millis: i64,
    pub end_millis: Option<i64>,
    pub zone: String,
    pub organizer_name: Option<String>,
    pub organizer_email: String,
    pub attendees: Vec<AttendeeSpec>,
}

impl InviteRequest {
    /// ## Summary
    /// Builds the event described by this request.
    #[must_use]
    pub fn to_event(&self, uids: &dyn UidGenerator) -> Event {
        let mut event = Event::with_identity(uids, Utc::now());
        event.add_property(SUMMARY, &self.summary);
        if let Some(description) = &self.description {
            event.add_property(DESCRIPTION, description);
        }
        if let Some(location) = &self.location {
            event.add_property(LOCATION, location);
        }

        if !event.set_start(self.start_millis, &self.zone) {
            tracing::warn!(start = self.start_millis, "Ignoring invalid start time");
        }
        if let Some(end) = self.end_millis
            && !event.set_end(end, &self.zone)
        {
            tracing::warn!(end, "Ignoring invalid end time");
        }

        event.set_organizer(Organizer::new(
            self.organizer_name.as_deref(),
            Some(&self.organizer_email),
        ));
        for attendee in &self.attendees {
            if !event.add_attendee_from_model(attendee.name.as_deref(), &attendee.email, attendee.status) {
                tracing::warn!(email = %attendee.email, "Ignoring attendee without address");
            }
        }
        event
    }

    /// ## Summary
    /// Wraps the event in a calendar carrying VERSION, PRODID and the configured METHOD.
    #[must_use]
    #[tracing::instrument(skip_all, fields(summary = %self.summary, attendees = self.attendees.len()))]
    pub fn to_calendar(&self, settings: &CalendarConfig, uids: &dyn UidGenerator) -> Calendar {
        let mut calendar = Calendar::new();
        calendar.add_property(VERSION, ICALENDAR_VERSION);
        calendar.add_property(PRODID, &settings.product_id);
        if let Some(method) = &settings.method {
            calendar.add_property(METHOD, method);
        }
        calendar.add_event(self.to_event(uids));
        calendar
    }

    /// ## Summary
    /// Writes this invite to a new file in `dir` named after the summary and returns
    /// its path.
    ///
    /// ## Errors
    /// Returns an error if the invite file cannot be created or written.
    pub fn share(
        &self,
        settings: &Settings,
        uids: &dyn UidGenerator,
        dir: &Path,
    ) -> AppResult<PathBuf> {
        let calendar = self.to_calendar(&settings.calendar, uids);
        let prefix = file_prefix(calendar.first_event().and_then(Event::summary).as_deref());
        write_new_calendar_file(
            &calendar,
            &prefix,
            Some(settings.share.file_suffix.as_str()),
            dir,
        )
    }
}

/// ## Summary
/// Derives an invite file name prefix from an event title.
///
/// Runs of characters other than ASCII letters, digits and `_` collapse into one
/// space, and the prefix always ends with a space. Titles left with fewer than three
/// usable characters fall back to `invite`.
#[must_use]
pub fn file_prefix(summary: Option<&str>) -> String {
    summary
        .map(collapse_non_word)
        .filter(|prefix| prefix.trim().chars().count() >= MIN_FILE_PREFIX_LENGTH)
        .unwrap_or_else(|| collapse_non_word(INVITE_FILE_FALLBACK_PREFIX))
}

fn collapse_non_word(title: &str) -> String {
    let mut prefix = String::with_capacity(title.len() + 1);
    let mut in_gap = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            prefix.push(c);
            in_gap = false;
        } else if !in_gap {
            prefix.push(' ');
            in_gap = true;
        }
    }

    if !prefix.ends_with(' ') {
        prefix.push(' ');
    }
    prefix
}
