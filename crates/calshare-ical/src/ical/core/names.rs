//! Property and parameter names understood by the invite model.

// Calendar properties
pub const CALSCALE: &str = "CALSCALE";
pub const METHOD: &str = "METHOD";
pub const PRODID: &str = "PRODID";
pub const VERSION: &str = "VERSION";

// Event properties
pub const CATEGORIES: &str = "CATEGORIES";
pub const CLASS: &str = "CLASS";
pub const CREATED: &str = "CREATED";
pub const DESCRIPTION: &str = "DESCRIPTION";
pub const DTEND: &str = "DTEND";
pub const DTSTAMP: &str = "DTSTAMP";
pub const DTSTART: &str = "DTSTART";
pub const DURATION: &str = "DURATION";
pub const LOCATION: &str = "LOCATION";
pub const PRIORITY: &str = "PRIORITY";
pub const SEQ: &str = "SEQ";
pub const STATUS: &str = "STATUS";
pub const SUMMARY: &str = "SUMMARY";
pub const UID: &str = "UID";
pub const URL: &str = "URL";

// Relationship properties
pub const ATTENDEE: &str = "ATTENDEE";
pub const ORGANIZER: &str = "ORGANIZER";

// Attendee parameters
pub const CN: &str = "CN";
pub const CUTYPE: &str = "CUTYPE";
pub const PARTSTAT: &str = "PARTSTAT";
pub const ROLE: &str = "ROLE";
pub const RSVP: &str = "RSVP";
pub const X_NUM_GUESTS: &str = "X-NUM-GUESTS";

// Component names
pub const VCALENDAR: &str = "VCALENDAR";
pub const VEVENT: &str = "VEVENT";
pub const VORGANIZER: &str = "VORGANIZER";

/// Scheme prefix of calendar user addresses.
pub const MAILTO: &str = "mailto:";

// Component delimiters
pub const BEGIN: &str = "BEGIN";
pub const END: &str = "END";
