//! Content line lexer (RFC 5545 §3.1).
//!
//! Handles line unfolding and tokenization of content lines. The same grammar backs
//! the ORGANIZER/ATTENDEE parsers, so quoted parameter values written by
//! `escape_param_value` read back intact.

use std::iter::Peekable;
use std::str::CharIndices;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::ical::core::{ContentLine, Parameter};

/// Merges folded continuation lines into logical lines.
///
/// A physical line starting with a single space or tab continues the previous logical
/// line; the leading whitespace character is dropped. Trailing CRs are stripped and
/// blank lines skipped. Each logical line is paired with the 1-based number of the
/// physical line it started on.
#[must_use]
pub fn unfold_lines<I, S>(lines: I) -> Vec<(usize, String)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut logical: Vec<(usize, String)> = Vec::new();

    for (i, raw_line) in lines.into_iter().enumerate() {
        let line = raw_line.as_ref().trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        if line.starts_with([' ', '\t']) {
            let continuation = &line[1..];
            if let Some((_, prev)) = logical.last_mut() {
                prev.push_str(continuation);
            } else {
                logical.push((i + 1, continuation.to_string()));
            }
        } else {
            logical.push((i + 1, line.to_string()));
        }
    }

    logical
}

/// Parses a single content line.
///
/// Format: `name *(";" param) ":" value`
///
/// ## Errors
/// Returns an error if the line has no name, no colon, or a malformed parameter.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let mut chars = line.char_indices().peekable();
    let mut name_end = None;

    // Find the property name (ends at ';' or ':')
    while let Some(&(i, c)) = chars.peek() {
        if c == ';' || c == ':' {
            name_end = Some(i);
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(
                ParseErrorKind::InvalidPropertyName,
                line_num,
                i + 1,
            ));
        }
        chars.next();
    }

    let Some(name_end) = name_end else {
        return Err(ParseError::new(
            ParseErrorKind::MissingColon,
            line_num,
            line.len().max(1),
        ));
    };

    if name_end == 0 {
        return Err(ParseError::new(
            ParseErrorKind::MissingPropertyName,
            line_num,
            1,
        ));
    }

    let name = line[..name_end].to_ascii_uppercase();

    let mut params = Vec::new();
    let value_start = loop {
        match chars.next() {
            Some((i, ':')) => break i + 1,
            Some((_, ';')) => params.push(parse_parameter(&mut chars, line, line_num)?),
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::MissingColon,
                    line_num,
                    line.len().max(1),
                ));
            }
        }
    };

    Ok(ContentLine {
        name,
        params,
        raw_value: line[value_start..].to_string(),
    })
}

/// Parses `name "=" value`, leaving the terminating `;` or `:` unconsumed.
fn parse_parameter(
    chars: &mut Peekable<CharIndices<'_>>,
    line: &str,
    line_num: usize,
) -> ParseResult<Parameter> {
    let start = chars.peek().map_or(line.len(), |&(i, _)| i);

    let mut name_end = None;
    while let Some(&(i, c)) = chars.peek() {
        if c == '=' {
            name_end = Some(i);
            chars.next();
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(
                ParseErrorKind::InvalidParameter,
                line_num,
                i + 1,
            ));
        }
        chars.next();
    }

    let name_end = match name_end {
        Some(end) if end > start => end,
        _ => {
            return Err(ParseError::new(
                ParseErrorKind::InvalidParameter,
                line_num,
                start + 1,
            ));
        }
    };

    let value = parse_param_value(chars, line, line_num)?;

    match chars.peek() {
        Some(&(_, ';' | ':')) => Ok(Parameter::new(&line[start..name_end], value)),
        Some(&(i, c)) => Err(
            ParseError::new(ParseErrorKind::InvalidParameter, line_num, i + 1)
                .with_context(format!("unexpected character '{c}'")),
        ),
        None => Err(ParseError::new(
            ParseErrorKind::MissingColon,
            line_num,
            line.len(),
        )),
    }
}

/// Parses a parameter value (possibly quoted).
fn parse_param_value(
    chars: &mut Peekable<CharIndices<'_>>,
    line: &str,
    line_num: usize,
) -> ParseResult<String> {
    let Some(&(start, first)) = chars.peek() else {
        return Err(ParseError::new(
            ParseErrorKind::MissingColon,
            line_num,
            line.len(),
        ));
    };

    if first != '"' {
        // Unquoted value ends at ';' or ':'
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if c == ';' || c == ':' {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        return Ok(line[start..end].to_string());
    }

    chars.next(); // opening quote
    let mut value = String::new();

    while let Some((_, c)) = chars.next() {
        match c {
            '"' => return Ok(value),
            // Caret encoding (RFC 6868)
            '^' => match chars.peek() {
                Some(&(_, '^')) => {
                    value.push('^');
                    chars.next();
                }
                Some(&(_, 'n')) => {
                    value.push('\n');
                    chars.next();
                }
                Some(&(_, '\'')) => {
                    value.push('"');
                    chars.next();
                }
                _ => value.push('^'),
            },
            _ => value.push(c),
        }
    }

    Err(ParseError::new(
        ParseErrorKind::UnclosedQuote,
        line_num,
        start + 1,
    ))
}
