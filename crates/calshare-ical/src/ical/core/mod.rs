//! iCalendar invite model.
//!
//! Every component owns a [`PropertyBag`] restricted by a static [`PropertySchema`]
//! allow-list. Schemas declare properties in output order, so rendering is
//! deterministic.

mod attendee;
mod calendar;
mod datetime;
mod event;
pub mod names;
mod organizer;
mod property;
mod property_bag;
mod status;
mod uid;

pub use attendee::{ATTENDEE_PARAMETERS, Attendee};
pub use calendar::{CALENDAR_PROPERTIES, Calendar};
pub use datetime::{
    DATE_TIME_FORMAT, format_utc, format_utc_date_time, local_millis_to_utc, parse_utc,
};
pub use event::{EVENT_PROPERTIES, Event};
pub use organizer::Organizer;
pub use property::{ContentLine, Parameter};
pub use property_bag::{Cardinality, PropertyBag, PropertySchema};
pub use status::ParticipationStatus;
pub use uid::{RandomUidGenerator, SequentialUidGenerator, UidGenerator};
