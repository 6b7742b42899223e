//! iCalendar text encoding and decoding for shared calendar invites.
//!
//! The crate is text-in/text-out: it never touches the filesystem. Callers build a
//! [`Calendar`] out of [`Event`]s, [`Organizer`]s and [`Attendee`]s, render it, and
//! hand the resulting text to whatever writes it out. The reverse path parses an
//! ordered sequence of lines back into the same model.

pub mod error;
pub mod ical;

pub use error::{IcalError, IcalResult};
pub use ical::core::{
    Attendee, Calendar, Cardinality, Event, Organizer, ParticipationStatus, PropertyBag,
    PropertySchema, RandomUidGenerator, SequentialUidGenerator, UidGenerator,
};
pub use ical::parse::{ParseError, ParseErrorKind, ParseResult};
