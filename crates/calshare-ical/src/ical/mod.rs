//! iCalendar (RFC 5545) invite model, serializer and parser.
//!
//! - `core`: property bags and the Calendar/Event/Attendee/Organizer model
//! - `build`: text escaping and line folding
//! - `parse`: content line tokenizing and parse errors
//!
//! ## Example
//!
//! ```rust
//! use calshare_ical::{Attendee, Calendar, Event, Organizer, ParticipationStatus};
//!
//! let mut event = Event::new();
//! event.add_property("SUMMARY", "Team Sync");
//! event.set_start(1_700_000_000_000, "UTC");
//! event.set_organizer(Organizer::new(Some("Ada"), Some("ada@example.com")));
//! event.add_attendee(Attendee::from_model(
//!     Some("Bob"),
//!     "bob@example.com",
//!     ParticipationStatus::Accepted,
//! ));
//!
//! let mut calendar = Calendar::new();
//! calendar.add_property("VERSION", "2.0");
//! calendar.add_event(event);
//!
//! let text = calendar.render().unwrap();
//! let parsed = Calendar::from_text(&text).unwrap();
//! assert_eq!(parsed.events().len(), 1);
//! ```

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;
