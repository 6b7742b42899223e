//! ORGANIZER property of an event (RFC 5545 §3.8.4.3).

use calshare_core::constants::UNKNOWN;

use super::names::{CN, MAILTO, ORGANIZER};
use super::property::ContentLine;
use crate::ical::build::{escape_param_value, fold_line};
use crate::ical::parse::{ParseError, ParseErrorKind, ParseResult, parse_content_line};

/// Event organizer: a display name and an email address.
///
/// Neither field is ever empty; missing values become `UNKNOWN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organizer {
    name: String,
    email: String,
}

impl Organizer {
    /// Creates an organizer, substituting `UNKNOWN` for absent or empty fields.
    #[must_use]
    pub fn new(name: Option<&str>, email: Option<&str>) -> Self {
        Self {
            name: or_unknown(name),
            email: or_unknown(email),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Renders `ORGANIZER;CN=<name>:mailto:<email>` followed by a newline, folded.
    #[must_use]
    pub fn render(&self) -> String {
        let line = format!(
            "{ORGANIZER};{CN}={}:{MAILTO}{}",
            escape_param_value(&self.name),
            self.email
        );
        let mut output = fold_line(&line);
        output.push('\n');
        output
    }

    /// Parses a single (unfolded) ORGANIZER line.
    ///
    /// ## Errors
    /// Returns an error if the line is not an ORGANIZER property or its value lacks
    /// the `mailto:` scheme.
    pub fn parse(line: &str) -> ParseResult<Self> {
        let content_line = parse_content_line(line, 1)?;
        Self::from_content_line(&content_line, 1)
    }

    pub(crate) fn from_content_line(cl: &ContentLine, line_num: usize) -> ParseResult<Self> {
        if cl.name != ORGANIZER {
            return Err(
                ParseError::new(ParseErrorKind::InvalidPropertyName, line_num, 1)
                    .with_context(format!("expected {ORGANIZER}, got {}", cl.name)),
            );
        }

        let email = strip_mailto(&cl.raw_value, &cl.name, line_num)?;
        Ok(Self::new(cl.param_value(CN), Some(email)))
    }
}

impl Default for Organizer {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn or_unknown(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// Strips the `mailto:` scheme (case-insensitive) from a calendar address.
pub(crate) fn strip_mailto<'a>(
    value: &'a str,
    property: &str,
    line_num: usize,
) -> ParseResult<&'a str> {
    let value = value.trim();
    match value.get(..MAILTO.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(MAILTO) => Ok(&value[MAILTO.len()..]),
        _ => Err(
            ParseError::new(ParseErrorKind::MissingMailto, line_num, 1)
                .with_context(format!("{property} value {value:?} must start with {MAILTO}")),
        ),
    }
}
