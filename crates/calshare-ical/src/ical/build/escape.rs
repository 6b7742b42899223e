//! iCalendar text escaping utilities.

/// Escapes a TEXT value for storage and output.
///
/// Line breaks (CR, LF or CRLF) become the two-character sequence `\n`, then `;` and `,`
/// are backslash-escaped. Backslashes are left alone, so text that already contains a
/// literal `\n` sequence does not survive [`uncleanse_text`] unchanged.
#[must_use]
pub fn cleanse_text(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len() + 10);
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                // CRLF collapses to a single escaped newline
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push_str("\\n");
            }
            '\n' => result.push_str("\\n"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            _ => result.push(c),
        }
    }

    result
}

/// Reverses [`cleanse_text`]: `\n` and `\N` become a newline, `\;` and `\,` lose
/// their backslash. Any other backslash sequence is kept as-is.
#[must_use]
pub fn uncleanse_text(escaped: &str) -> String {
    let mut result = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => result.push('\n'),
            Some(';') => result.push(';'),
            Some(',') => result.push(','),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}

/// Escapes a parameter value if needed.
///
/// Values containing `:`, `;`, `,`, `"` or a newline are wrapped in double quotes, with
/// caret encoding (RFC 6868) for the characters a quoted string cannot hold.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    if !needs_quoting(s) {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len() + 10);
    result.push('"');
    for c in s.chars() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '"' => result.push_str("^'"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

fn needs_quoting(s: &str) -> bool {
    s.chars().any(|c| matches!(c, ':' | ';' | ',' | '"' | '\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleanse_reserved_characters() {
        assert_eq!(
            cleanse_text("Meeting; Room 2, Building A\nBring laptop"),
            "Meeting\\; Room 2\\, Building A\\nBring laptop"
        );
    }

    #[test]
    fn cleanse_line_break_variants() {
        assert_eq!(cleanse_text("a\r\nb"), "a\\nb");
        assert_eq!(cleanse_text("a\rb"), "a\\nb");
        assert_eq!(cleanse_text("a\n\nb"), "a\\n\\nb");
    }

    #[test]
    fn cleanse_leaves_plain_text() {
        assert_eq!(cleanse_text("Team Sync"), "Team Sync");
        assert_eq!(cleanse_text(""), "");
        assert_eq!(cleanse_text("back\\slash"), "back\\slash");
    }

    #[test]
    fn uncleanse_inverts_cleanse() {
        let samples = [
            "Meeting; Room 2, Building A\nBring laptop",
            ";;,,\n\n",
            "plain",
            "trailing newline\n",
            ",leading comma",
            "mixed;\n,;\n",
        ];
        for sample in samples {
            assert_eq!(uncleanse_text(&cleanse_text(sample)), sample, "{sample:?}");
        }
    }

    #[test]
    fn uncleanse_normalizes_crlf_to_lf() {
        assert_eq!(uncleanse_text(&cleanse_text("a\r\nb\rc")), "a\nb\nc");
    }

    #[test]
    fn uncleanse_keeps_unknown_sequences() {
        assert_eq!(uncleanse_text("a\\tb"), "a\\tb");
        assert_eq!(uncleanse_text("ends with\\"), "ends with\\");
        assert_eq!(uncleanse_text("upper\\Ncase"), "upper\ncase");
    }

    #[test]
    fn escape_param_value_simple() {
        assert_eq!(escape_param_value("UNKNOWN"), "UNKNOWN");
        assert_eq!(escape_param_value("Jane Doe"), "Jane Doe");
    }

    #[test]
    fn escape_param_value_quoted() {
        assert_eq!(escape_param_value("Doe, Jane"), "\"Doe, Jane\"");
        assert_eq!(escape_param_value("Has;semi"), "\"Has;semi\"");
        assert_eq!(escape_param_value("Dr: Who"), "\"Dr: Who\"");
    }

    #[test]
    fn escape_param_value_caret() {
        assert_eq!(escape_param_value("Line1\nLine2"), "\"Line1^nLine2\"");
        assert_eq!(escape_param_value("Has\"quote"), "\"Has^'quote\"");
    }
}
