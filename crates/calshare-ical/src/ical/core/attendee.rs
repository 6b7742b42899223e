//! ATTENDEE property of an event (RFC 5545 §3.8.4.1).

use super::names::{ATTENDEE, CN, CUTYPE, MAILTO, PARTSTAT, ROLE, RSVP, X_NUM_GUESTS};
use super::organizer::strip_mailto;
use super::property::ContentLine;
use super::property_bag::{Cardinality, PropertyBag, PropertySchema};
use super::status::ParticipationStatus;
use crate::ical::build::{escape_param_value, fold_line};
use crate::ical::parse::{ParseError, ParseErrorKind, ParseResult, parse_content_line};

/// Parameters an attendee may carry, in output order.
pub static ATTENDEE_PARAMETERS: PropertySchema = PropertySchema::new(
    ATTENDEE,
    &[
        (CN, Cardinality::Unary),
        (PARTSTAT, Cardinality::Unary),
        (RSVP, Cardinality::Unary),
        (ROLE, Cardinality::Unary),
        (CUTYPE, Cardinality::Unary),
    ],
);

/// An invited participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    params: PropertyBag,
    email: String,
}

impl Attendee {
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            params: PropertyBag::new(&ATTENDEE_PARAMETERS),
            email: email.into(),
        }
    }

    /// Builds an attendee from the calendar data model: display name, email and status.
    #[must_use]
    pub fn from_model(name: Option<&str>, email: impl Into<String>, status: ParticipationStatus) -> Self {
        let mut attendee = Self::new(email);
        if let Some(name) = name {
            attendee.add_property(CN, name);
        }
        attendee.add_property(PARTSTAT, status.as_str());
        attendee
    }

    /// Sets one of CN, PARTSTAT, RSVP, ROLE or CUTYPE.
    ///
    /// Returns `false` for any other name or an empty value.
    pub fn add_property(&mut self, name: &str, value: &str) -> bool {
        self.params.set(name, value)
    }

    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether the attendee has a non-blank address to invite.
    #[must_use]
    pub fn has_address(&self) -> bool {
        !self.email.trim().is_empty()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.params.get(CN)
    }

    /// Returns the PARTSTAT value, treating a missing one as needing action.
    #[must_use]
    pub fn participation_status(&self) -> ParticipationStatus {
        self.params
            .get(PARTSTAT)
            .map_or(ParticipationStatus::NeedsAction, ParticipationStatus::parse)
    }

    /// Renders `ATTENDEE;<NAME>=<value>;...;X-NUM-GUESTS=0:mailto:<email>` followed by a
    /// newline, folded.
    #[must_use]
    pub fn render(&self) -> String {
        let mut line = String::from(ATTENDEE);
        for (name, value) in self.params.entries() {
            line.push(';');
            line.push_str(name);
            line.push('=');
            line.push_str(&escape_param_value(value));
        }
        line.push_str(&format!(";{X_NUM_GUESTS}=0:{MAILTO}{}", self.email));

        let mut output = fold_line(&line);
        output.push('\n');
        output
    }

    /// Parses a single (unfolded) ATTENDEE line.
    ///
    /// ## Errors
    /// Returns an error if the line is not an ATTENDEE property or its value is not a
    /// non-empty `mailto:` address.
    pub fn parse(line: &str) -> ParseResult<Self> {
        let content_line = parse_content_line(line, 1)?;
        Self::from_content_line(&content_line, 1)
    }

    pub(crate) fn from_content_line(cl: &ContentLine, line_num: usize) -> ParseResult<Self> {
        if cl.name != ATTENDEE {
            return Err(
                ParseError::new(ParseErrorKind::InvalidPropertyName, line_num, 1)
                    .with_context(format!("expected {ATTENDEE}, got {}", cl.name)),
            );
        }

        let email = strip_mailto(&cl.raw_value, &cl.name, line_num)?;
        if email.is_empty() {
            return Err(ParseError::new(ParseErrorKind::MissingMailto, line_num, 1)
                .with_context(format!("{ATTENDEE} has an empty {MAILTO} address")));
        }

        let mut attendee = Self::new(email);
        for param in &cl.params {
            if !attendee.add_property(&param.name, &param.value) {
                tracing::trace!(line = line_num, param = %param.name, "Skipping attendee parameter");
            }
        }
        Ok(attendee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_parameters() {
        let attendee = Attendee::new("bob@example.com");
        assert_eq!(
            attendee.render(),
            "ATTENDEE;X-NUM-GUESTS=0:mailto:bob@example.com\n"
        );
    }

    #[test]
    fn render_in_declaration_order() {
        let mut attendee = Attendee::new("bob@example.com");
        attendee.add_property(ROLE, "REQ-PARTICIPANT");
        attendee.add_property(PARTSTAT, "ACCEPTED");
        attendee.add_property(CN, "Bob");

        let expected =
            "ATTENDEE;CN=Bob;PARTSTAT=ACCEPTED;ROLE=REQ-PARTICIPANT;X-NUM-GUESTS=0:mailto:bob@example.com";
        let rendered = attendee.render();

        // 92 characters, so the line is folded once
        assert_eq!(rendered, format!("{}\n", fold_line(expected)));
        assert_eq!(rendered.matches("\n ").count(), 1);
        assert_eq!(rendered.replace("\n ", ""), format!("{expected}\n"));
    }

    #[test]
    fn add_property_allow_list() {
        let mut attendee = Attendee::new("bob@example.com");
        assert!(attendee.add_property("RSVP", "TRUE"));
        assert!(attendee.add_property("cutype", "INDIVIDUAL"));
        assert!(!attendee.add_property("DELEGATED-TO", "mailto:x@example.com"));
        assert!(!attendee.add_property("CN", ""));
        assert_eq!(attendee.get_property("CUTYPE"), Some("INDIVIDUAL"));
        assert_eq!(attendee.get_property("DELEGATED-TO"), None);
    }

    #[test]
    fn from_model_sets_name_and_status() {
        let attendee = Attendee::from_model(
            Some("Carol"),
            "carol@example.com",
            ParticipationStatus::from_code(4),
        );
        assert_eq!(attendee.name(), Some("Carol"));
        assert_eq!(attendee.get_property(PARTSTAT), Some("TENTATIVE"));
        assert_eq!(attendee.participation_status(), ParticipationStatus::Tentative);
    }

    #[test]
    fn missing_status_needs_action() {
        let attendee = Attendee::new("dan@example.com");
        assert_eq!(attendee.participation_status(), ParticipationStatus::NeedsAction);
    }

    #[test]
    fn parse_round_trips_render() {
        let mut attendee = Attendee::from_model(
            Some("Doe, Jane"),
            "jane@example.com",
            ParticipationStatus::Declined,
        );
        attendee.add_property(RSVP, "TRUE");

        let rendered = attendee.render();
        let unfolded = rendered.trim_end().replace("\n ", "");
        let parsed = Attendee::parse(&unfolded).unwrap();

        assert_eq!(parsed, attendee);
    }

    #[test]
    fn parse_skips_unknown_parameters() {
        let parsed = Attendee::parse(
            "ATTENDEE;CN=Eve;DELEGATED-FROM=\"mailto:x@example.com\";X-NUM-GUESTS=0:mailto:eve@example.com",
        )
        .unwrap();
        assert_eq!(parsed.name(), Some("Eve"));
        assert_eq!(parsed.email(), "eve@example.com");
        assert_eq!(parsed.get_property("DELEGATED-FROM"), None);
    }

    #[test]
    fn parse_requires_mailto() {
        let err = Attendee::parse("ATTENDEE;CN=Eve:eve@example.com").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingMailto);
    }

    #[test]
    fn parse_rejects_empty_address() {
        for line in ["ATTENDEE:mailto:", "ATTENDEE;CN=Eve:MAILTO:  "] {
            let err = Attendee::parse(line).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::MissingMailto, "{line}");
            assert_eq!(
                err.context.as_deref(),
                Some("ATTENDEE has an empty mailto: address")
            );
        }
    }

    #[test]
    fn blank_email_has_no_address() {
        assert!(Attendee::new("bob@example.com").has_address());
        assert!(!Attendee::new("").has_address());
        assert!(!Attendee::new("  ").has_address());
    }
}
