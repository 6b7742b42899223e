/// Product name used to build identifiers shared across crates
pub const PRODUCT_NAME: &str = "calshare";

/// Value of the PRODID property written into generated calendars
pub const PRODUCT_IDENTIFIER: &str = const_str::concat!("-//", PRODUCT_NAME, "//", PRODUCT_NAME, " invite//EN");

/// iCalendar version emitted in the VERSION property
pub const ICALENDAR_VERSION: &str = "2.0";

/// Domain appended to generated event UIDs
pub const UID_DOMAIN: &str = const_str::concat!(PRODUCT_NAME, ".local");

/// Maximum content line length before folding
pub const MAX_LINE_LENGTH: usize = 75;

/// Literal used for organizer fields that were not supplied
pub const UNKNOWN: &str = "UNKNOWN";

/// Suffix given to shared invite files
pub const INVITE_FILE_SUFFIX: &str = ".vcs";

/// Prefix used when an event title cannot serve as a file name prefix
pub const INVITE_FILE_FALLBACK_PREFIX: &str = "invite";

/// Shortest prefix accepted when naming a new invite file
pub const MIN_FILE_PREFIX_LENGTH: usize = 3;

/// Suffix used for new files when none is given
pub const DEFAULT_FILE_SUFFIX: &str = ".tmp";
