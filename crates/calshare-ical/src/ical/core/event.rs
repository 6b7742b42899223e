//! VEVENT component (RFC 5545 §3.6.1).

use chrono::{DateTime, Utc};

use super::attendee::Attendee;
use super::datetime::{format_utc, format_utc_date_time};
use super::names::{
    ATTENDEE, BEGIN, CATEGORIES, CLASS, CREATED, DESCRIPTION, DTEND, DTSTAMP, DTSTART, DURATION,
    END, LOCATION, ORGANIZER, PRIORITY, SEQ, STATUS, SUMMARY, UID, URL, VEVENT, VORGANIZER,
};
use super::organizer::Organizer;
use super::property_bag::{Cardinality, PropertyBag, PropertySchema};
use super::status::ParticipationStatus;
use super::uid::{RandomUidGenerator, UidGenerator};
use crate::error::{IcalError, IcalResult};
use crate::ical::build::{cleanse_text, fold_line, uncleanse_text};
use crate::ical::parse::{ParseError, ParseErrorKind, ParseResult, parse_content_line};

/// Properties an event may carry, in output order.
pub static EVENT_PROPERTIES: PropertySchema = PropertySchema::new(
    VEVENT,
    &[
        (UID, Cardinality::Unary),
        (DTSTAMP, Cardinality::Unary),
        (DTSTART, Cardinality::Unary),
        (DTEND, Cardinality::Unary),
        (DURATION, Cardinality::Unary),
        (SUMMARY, Cardinality::Unary),
        (DESCRIPTION, Cardinality::Unary),
        (LOCATION, Cardinality::Unary),
        (CLASS, Cardinality::Unary),
        (STATUS, Cardinality::Unary),
        (PRIORITY, Cardinality::Unary),
        (SEQ, Cardinality::Unary),
        (URL, Cardinality::Unary),
        (CREATED, Cardinality::Unary),
        (CATEGORIES, Cardinality::Multi),
    ],
);

/// A calendar event with its organizer and attendees.
///
/// Property values are stored in their escaped (cleansed) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    properties: PropertyBag,
    organizer: Option<Organizer>,
    attendees: Vec<Attendee>,
}

impl Event {
    /// Creates an event stamped with a random UID and the current time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_identity(&RandomUidGenerator::default(), Utc::now())
    }

    /// Creates an event whose UID comes from `uids` and whose DTSTAMP is `stamp`.
    #[must_use]
    pub fn with_identity(uids: &dyn UidGenerator, stamp: DateTime<Utc>) -> Self {
        let mut event = Self::empty();
        event.add_property(UID, &uids.generate());
        event.add_property(DTSTAMP, &format_utc(&stamp));
        event
    }

    fn empty() -> Self {
        Self {
            properties: PropertyBag::new(&EVENT_PROPERTIES),
            organizer: None,
            attendees: Vec::new(),
        }
    }

    /// Cleanses `value` and stores it under `name`.
    ///
    /// Returns `false` if `name` is not an event property or `value` is empty.
    /// CATEGORIES appends; every other property replaces its previous value.
    pub fn add_property(&mut self, name: &str, value: &str) -> bool {
        self.properties.set(name, cleanse_text(value))
    }

    /// Sets DTSTART from epoch milliseconds observed in `zone`.
    ///
    /// Negative milliseconds leave the event unchanged and return `false`.
    pub fn set_start(&mut self, millis: i64, zone: &str) -> bool {
        self.set_date_time(DTSTART, millis, zone)
    }

    /// Sets DTEND from epoch milliseconds observed in `zone`.
    ///
    /// Negative milliseconds leave the event unchanged and return `false`.
    pub fn set_end(&mut self, millis: i64, zone: &str) -> bool {
        self.set_date_time(DTEND, millis, zone)
    }

    fn set_date_time(&mut self, name: &str, millis: i64, zone: &str) -> bool {
        format_utc_date_time(millis, zone).is_some_and(|value| self.add_property(name, &value))
    }

    pub fn set_organizer(&mut self, organizer: Organizer) {
        self.organizer = Some(organizer);
    }

    /// Appends an attendee; invite order is preserved.
    ///
    /// Returns `false` and leaves the event unchanged if the attendee has no address.
    pub fn add_attendee(&mut self, attendee: Attendee) -> bool {
        if !attendee.has_address() {
            tracing::debug!(name = attendee.name(), "Skipping attendee without address");
            return false;
        }
        self.attendees.push(attendee);
        true
    }

    /// Builds an attendee from the calendar data model and appends it.
    ///
    /// Returns `false` if `email` is blank.
    pub fn add_attendee_from_model(
        &mut self,
        name: Option<&str>,
        email: &str,
        status: ParticipationStatus,
    ) -> bool {
        self.add_attendee(Attendee::from_model(name, email, status))
    }

    /// Returns the stored (escaped) value of `name`.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name)
    }

    /// Returns every stored value of `name`.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> &[String] {
        self.properties.get_all(name)
    }

    #[must_use]
    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_property(UID)
    }

    /// Returns the SUMMARY with escapes removed.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.get_property(SUMMARY).map(uncleanse_text)
    }

    /// Returns the DESCRIPTION with escapes removed.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        self.get_property(DESCRIPTION).map(uncleanse_text)
    }

    #[must_use]
    pub fn organizer(&self) -> Option<&Organizer> {
        self.organizer.as_ref()
    }

    #[must_use]
    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    /// Renders the `BEGIN:VEVENT` ... `END:VEVENT` block.
    ///
    /// ## Errors
    /// Returns [`IcalError::InvalidComponent`] if no organizer has been set.
    #[tracing::instrument(skip(self), fields(uid = self.uid(), attendees = self.attendees.len()))]
    pub fn render(&self) -> IcalResult<String> {
        let Some(organizer) = &self.organizer else {
            tracing::warn!("Refusing to render event without organizer");
            return Err(IcalError::InvalidComponent(format!(
                "{VEVENT} requires an {ORGANIZER}"
            )));
        };

        let mut output = format!("{BEGIN}:{VEVENT}\n");
        for (name, value) in self.properties.entries() {
            output.push_str(&fold_line(&format!("{name}:{value}")));
            output.push('\n');
        }
        output.push_str(&organizer.render());
        for attendee in &self.attendees {
            output.push_str(&attendee.render());
        }
        output.push_str(&format!("{END}:{VEVENT}\n"));

        Ok(output)
    }

    /// Parses one event from unfolded `(line number, line)` pairs.
    ///
    /// The first line must be `BEGIN:VEVENT`; lines are consumed up to and including
    /// the matching `END:VEVENT`. Properties outside the allow-list and nested
    /// components are skipped.
    ///
    /// ## Errors
    /// Returns an error if the block is not opened or closed properly, or a content,
    /// ORGANIZER or ATTENDEE line is malformed.
    #[tracing::instrument(skip(lines))]
    pub fn parse<I>(lines: &mut I) -> ParseResult<Self>
    where
        I: Iterator<Item = (usize, String)>,
    {
        let (begin_line, first) = lines
            .next()
            .ok_or_else(|| ParseError::new(ParseErrorKind::UnexpectedEof, 1, 1))?;

        let begin = parse_content_line(&first, begin_line)?;
        if !begin.is_marker(BEGIN, VEVENT) {
            return Err(ParseError::new(ParseErrorKind::MissingBegin, begin_line, 1)
                .with_context(format!("expected {BEGIN}:{VEVENT}, got {first}")));
        }

        let mut event = Self::empty();
        loop {
            let Some((line_num, line)) = lines.next() else {
                return Err(ParseError::new(ParseErrorKind::MissingEnd, begin_line, 1)
                    .with_context(format!("missing {END}:{VEVENT}")));
            };

            let content_line = parse_content_line(&line, line_num)?;
            tracing::trace!(line = line_num, name = %content_line.name, "Event content line");

            match content_line.name.as_str() {
                BEGIN if content_line.is_marker(BEGIN, VORGANIZER) => {
                    if let Some(organizer) = parse_organizer_block(lines, line_num)? {
                        event.organizer = Some(organizer);
                    }
                }
                BEGIN => skip_component(lines, &content_line.raw_value, line_num)?,
                END => {
                    if content_line.is_marker(END, VEVENT) {
                        break;
                    }
                    return Err(
                        ParseError::new(ParseErrorKind::MismatchedComponent, line_num, 1)
                            .with_context(format!(
                                "expected {END}:{VEVENT}, got {END}:{}",
                                content_line.raw_value
                            )),
                    );
                }
                ORGANIZER => {
                    event.organizer = Some(Organizer::from_content_line(&content_line, line_num)?);
                }
                ATTENDEE => {
                    event
                        .attendees
                        .push(Attendee::from_content_line(&content_line, line_num)?);
                }
                name => {
                    // Values are already escaped on the wire
                    if !event.properties.set(name, content_line.raw_value) {
                        tracing::debug!(line = line_num, name, "Skipping event property");
                    }
                }
            }
        }

        tracing::debug!(
            uid = event.uid(),
            attendees = event.attendees.len(),
            "Parsed event"
        );
        Ok(event)
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the ORGANIZER line of a `BEGIN:VORGANIZER` block written by older clients.
fn parse_organizer_block<I>(lines: &mut I, begin_line: usize) -> ParseResult<Option<Organizer>>
where
    I: Iterator<Item = (usize, String)>,
{
    let mut organizer = None;
    for (line_num, line) in lines.by_ref() {
        let content_line = parse_content_line(&line, line_num)?;
        if content_line.is_marker(END, VORGANIZER) {
            return Ok(organizer);
        }
        if content_line.name == ORGANIZER {
            organizer = Some(Organizer::from_content_line(&content_line, line_num)?);
        }
    }

    Err(ParseError::new(ParseErrorKind::MissingEnd, begin_line, 1)
        .with_context(format!("missing {END}:{VORGANIZER}")))
}

/// Consumes a nested component (e.g. VALARM) through its matching END line.
fn skip_component<I>(lines: &mut I, name: &str, begin_line: usize) -> ParseResult<()>
where
    I: Iterator<Item = (usize, String)>,
{
    let name = name.trim().to_ascii_uppercase();
    tracing::warn!(line = begin_line, component = %name, "Skipping nested component");

    let mut depth = 1usize;
    for (line_num, line) in lines.by_ref() {
        let content_line = parse_content_line(&line, line_num)?;
        if content_line.is_marker(BEGIN, &name) {
            depth += 1;
        } else if content_line.is_marker(END, &name) {
            depth -= 1;
            if depth == 0 {
                return Ok(());
            }
        }
    }

    Err(ParseError::new(ParseErrorKind::MissingEnd, begin_line, 1)
        .with_context(format!("missing {END}:{name}")))
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
