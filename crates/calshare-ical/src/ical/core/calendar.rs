//! VCALENDAR document (RFC 5545 §3.4).

use super::event::Event;
use super::names::{BEGIN, CALSCALE, END, METHOD, PRODID, VCALENDAR, VERSION, VEVENT};
use super::property_bag::{Cardinality, PropertyBag, PropertySchema};
use crate::error::IcalResult;
use crate::ical::build::{cleanse_text, fold_line};
use crate::ical::parse::{ParseResult, parse_content_line, unfold_lines};

/// Document-level properties, in output order.
pub static CALENDAR_PROPERTIES: PropertySchema = PropertySchema::new(
    VCALENDAR,
    &[
        (VERSION, Cardinality::Unary),
        (PRODID, Cardinality::Unary),
        (CALSCALE, Cardinality::Unary),
        (METHOD, Cardinality::Unary),
    ],
);

/// A calendar document holding zero or more events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    properties: PropertyBag,
    events: Vec<Event>,
}

impl Calendar {
    #[must_use]
    pub fn new() -> Self {
        Self {
            properties: PropertyBag::new(&CALENDAR_PROPERTIES),
            events: Vec::new(),
        }
    }

    /// Cleanses `value` and stores it under `name`.
    ///
    /// Returns `false` for names other than VERSION, PRODID, CALSCALE and METHOD, or
    /// for an empty value.
    pub fn add_property(&mut self, name: &str, value: &str) -> bool {
        self.properties.set(name, cleanse_text(value))
    }

    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name)
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The first event, which is the invite when the document came from a share.
    #[must_use]
    pub fn first_event(&self) -> Option<&Event> {
        self.events.first()
    }

    /// Renders the whole document.
    ///
    /// ## Errors
    /// Returns an error if any event cannot be rendered.
    #[tracing::instrument(skip(self), fields(events = self.events.len()))]
    pub fn render(&self) -> IcalResult<String> {
        let mut output = format!("{BEGIN}:{VCALENDAR}\n");
        for (name, value) in self.properties.entries() {
            output.push_str(&fold_line(&format!("{name}:{value}")));
            output.push('\n');
        }
        for event in &self.events {
            output.push_str(&event.render()?);
        }
        output.push_str(&format!("{END}:{VCALENDAR}\n"));

        tracing::debug!(bytes = output.len(), "Rendered calendar");
        Ok(output)
    }

    /// Parses a document from its raw (possibly folded) lines.
    ///
    /// Lines before `BEGIN:VCALENDAR` are only matched as raw markers, so mail headers
    /// or other free text around the document are skipped. Everything after
    /// `END:VCALENDAR` is left unread. Document-level properties are ignored and every
    /// `BEGIN:VEVENT` block becomes an event.
    ///
    /// ## Errors
    /// Returns an error if a line inside the document cannot be tokenized or an event
    /// is malformed.
    #[tracing::instrument(skip(lines))]
    pub fn parse<I, S>(lines: I) -> ParseResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut calendar = Self::new();
        let mut lines = unfold_lines(lines).into_iter().peekable();

        let mut inside = false;
        while let Some((line_num, line)) = lines.peek() {
            if !inside {
                if is_raw_marker(line, BEGIN, VEVENT) {
                    calendar.add_event(Event::parse(&mut lines)?);
                    continue;
                }
                inside = is_raw_marker(line, BEGIN, VCALENDAR);
                if !inside {
                    tracing::trace!(line = *line_num, "Skipping line before calendar");
                }
                lines.next();
                continue;
            }

            let content_line = parse_content_line(line, *line_num)?;
            if content_line.is_marker(BEGIN, VEVENT) {
                calendar.add_event(Event::parse(&mut lines)?);
                continue;
            }
            if content_line.is_marker(END, VCALENDAR) {
                break;
            }

            tracing::trace!(line = *line_num, name = %content_line.name, "Ignoring calendar line");
            lines.next();
        }

        tracing::debug!(events = calendar.events.len(), "Parsed calendar");
        Ok(calendar)
    }

    /// Parses a document from text with `\n` or `\r\n` line endings.
    ///
    /// ## Errors
    /// See [`Calendar::parse`].
    pub fn from_text(text: &str) -> ParseResult<Self> {
        Self::parse(text.lines())
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

/// Matches a `BEGIN:<component>` style line without tokenizing it.
fn is_raw_marker(line: &str, marker: &str, component: &str) -> bool {
    line.trim().split_once(':').is_some_and(|(name, value)| {
        name.eq_ignore_ascii_case(marker) && value.trim().eq_ignore_ascii_case(component)
    })
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
