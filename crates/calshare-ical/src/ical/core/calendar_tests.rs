use super::*;
use crate::ical::core::{Attendee, Organizer, ParticipationStatus, SequentialUidGenerator};
use crate::ical::parse::ParseErrorKind;

fn invite(uids: &SequentialUidGenerator, summary: &str) -> Event {
    let mut event = Event::with_identity(uids, chrono::DateTime::default());
    event.add_property("SUMMARY", summary);
    event.set_organizer(Organizer::new(Some("Alice"), Some("alice@example.com")));
    event
}

#[test_log::test]
fn empty_calendar_renders_markers_only() {
    let rendered = Calendar::new().render().unwrap_or_default();
    assert_eq!(rendered, "BEGIN:VCALENDAR\nEND:VCALENDAR\n");
}

#[test_log::test]
fn properties_render_in_schema_order() {
    let mut calendar = Calendar::new();
    assert!(calendar.add_property(METHOD, "REQUEST"));
    assert!(calendar.add_property(PRODID, "-//calshare//test//EN"));
    assert!(calendar.add_property(VERSION, "2.0"));
    assert!(!calendar.add_property("X-WR-CALNAME", "Work"));

    let rendered = calendar.render().unwrap_or_default();
    assert_eq!(
        rendered,
        "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//calshare//test//EN\nMETHOD:REQUEST\nEND:VCALENDAR\n"
    );
}

#[test_log::test]
fn render_propagates_event_errors() {
    let mut calendar = Calendar::new();
    calendar.add_event(Event::new());
    assert!(calendar.render().is_err());
}

#[test_log::test]
fn events_keep_insertion_order() {
    let uids = SequentialUidGenerator::new("evt", "test.local");
    let mut calendar = Calendar::new();
    calendar.add_event(invite(&uids, "First"));
    calendar.add_event(invite(&uids, "Second"));

    let parsed = Calendar::from_text(&calendar.render().unwrap_or_default())
        .unwrap_or_else(|e| panic!("{e}"));
    let summaries: Vec<_> = parsed.events().iter().filter_map(Event::summary).collect();
    assert_eq!(summaries, ["First", "Second"]);
    assert_eq!(parsed.first_event().and_then(Event::uid), Some("evt-1@test.local"));
}

#[test_log::test]
fn document_properties_are_not_read_back() {
    let mut calendar = Calendar::new();
    calendar.add_property(VERSION, "2.0");
    calendar.add_property(PRODID, "-//calshare//test//EN");

    let parsed = Calendar::from_text(&calendar.render().unwrap_or_default())
        .unwrap_or_else(|e| panic!("{e}"));
    assert!(parsed.get_property(VERSION).is_none());
    assert!(parsed.get_property(PRODID).is_none());
    assert!(parsed.events().is_empty());
}

#[test_log::test]
fn parse_accepts_crlf_and_surrounding_noise() {
    let text = "garbage before\r\n\
        BEGIN:VCALENDAR\r\n\
        VERSION:2.0\r\n\
        BEGIN:VEVENT\r\n\
        UID:one\r\n\
        ORGANIZER:mailto:alice@example.com\r\n\
        END:VEVENT\r\n\
        END:VCALENDAR\r\n\
        BEGIN:VEVENT\r\n\
        UID:ignored\r\n\
        END:VEVENT\r\n";

    let calendar = Calendar::from_text(text).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(calendar.events().len(), 1);
    let event = &calendar.events()[0];
    assert_eq!(event.uid(), Some("one"));
    assert_eq!(event.organizer().map(Organizer::name), Some("UNKNOWN"));
}

#[test_log::test]
fn parse_skips_mail_text_around_calendar() {
    let text = "From: Alice <alice@example.com>\n\
        ; forwarded invite below\n\
        \n\
        begin:vcalendar\n\
        BEGIN:VEVENT\n\
        SUMMARY:Review\n\
        ORGANIZER;CN=Alice:mailto:alice@example.com\n\
        END:VEVENT\n\
        END:VCALENDAR\n\
        -- \n\
        ;sent from my phone\n";

    let calendar = Calendar::from_text(text).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(calendar.events().len(), 1);
    assert_eq!(calendar.events()[0].summary().as_deref(), Some("Review"));
}

#[test_log::test]
fn parse_tokenizes_lines_inside_calendar() {
    let text = "BEGIN:VCALENDAR\nfree text\nEND:VCALENDAR\n";
    let err = Calendar::from_text(text).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidPropertyName);
    assert_eq!(err.line, 2);
}

#[test_log::test]
fn parse_event_error_carries_line_number() {
    let text = "BEGIN:VCALENDAR\nBEGIN:VEVENT\nUID:open\nEND:VCALENDAR\n";
    let err = Calendar::from_text(text).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MismatchedComponent);
    assert_eq!(err.line, 4);
}

#[test_log::test]
fn parse_reads_attendee_statuses() {
    let uids = SequentialUidGenerator::new("evt", "test.local");
    let mut event = invite(&uids, "Standup");
    event.add_attendee_from_model(Some("Bob"), "bob@example.com", ParticipationStatus::Accepted);
    event.add_attendee_from_model(Some("Carol"), "carol@example.com", ParticipationStatus::Declined);
    let mut calendar = Calendar::new();
    calendar.add_event(event);

    let parsed = Calendar::from_text(&calendar.render().unwrap_or_default())
        .unwrap_or_else(|e| panic!("{e}"));
    let statuses: Vec<_> = parsed.events()[0]
        .attendees()
        .iter()
        .map(Attendee::participation_status)
        .collect();
    assert_eq!(
        statuses,
        [ParticipationStatus::Accepted, ParticipationStatus::Declined]
    );
}
