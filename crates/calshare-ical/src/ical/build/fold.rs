//! Content line folding (RFC 5545 §3.1).

use calshare_core::constants::MAX_LINE_LENGTH;

/// Folds text to the default 75-character line length.
///
/// See [`fold_line_to`].
#[must_use]
pub fn fold_line(text: &str) -> String {
    fold_line_to(text, MAX_LINE_LENGTH)
}

/// Folds text so that no output line exceeds `max_len` characters.
///
/// Text that is already short enough is returned unchanged. Otherwise the text is
/// scanned once: when the current line is full, a newline and a single continuation
/// space are inserted before the next character. The continuation space counts toward
/// the new line's length. Newlines already present in the text end a line without
/// starting a continuation.
///
/// Lengths are counted in characters, so multi-byte characters are never split.
/// `max_len` is clamped to at least 2 so every continuation line carries content.
#[must_use]
pub fn fold_line_to(text: &str, max_len: usize) -> String {
    let max_len = max_len.max(2);

    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + (text.len() / max_len) * 2);
    let mut line_len = 0;

    for c in text.chars() {
        if c == '\n' {
            result.push(c);
            line_len = 0;
            continue;
        }

        if line_len >= max_len {
            result.push_str("\n ");
            line_len = 1;
        }

        result.push(c);
        line_len += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unfold(folded: &str) -> String {
        folded.replace("\n ", "")
    }

    #[test]
    fn short_line_unchanged() {
        let line = "SUMMARY:Short";
        assert_eq!(fold_line(line), line);
    }

    #[test]
    fn exactly_75_unchanged() {
        let line = "X".repeat(75);
        assert_eq!(fold_line(&line), line);
    }

    #[test]
    fn fold_boundary_76() {
        let line = "A".repeat(76);
        let folded = fold_line(&line);

        let lines: Vec<&str> = folded.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 75);
        assert_eq!(lines[1], " A");
    }

    #[test]
    fn every_line_within_limit() {
        let line = "B".repeat(400);
        let folded = fold_line(&line);

        for segment in folded.split('\n') {
            assert!(segment.chars().count() <= 75, "{segment:?}");
        }
        assert_eq!(unfold(&folded), line);
    }

    #[test]
    fn continuation_lines_hold_74_characters() {
        let line = "C".repeat(75 + 74 + 10);
        let folded = fold_line(&line);

        let lines: Vec<&str> = folded.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].len(), 75);
        assert!(lines[1].starts_with(' '));
        assert_eq!(lines[2].len(), 11);
    }

    #[test]
    fn embedded_newlines_reset_the_counter() {
        let text = format!("{}\n{}", "D".repeat(70), "E".repeat(70));
        let folded = fold_line(&text);

        // Neither line is long enough to fold on its own
        assert_eq!(folded, text);
    }

    #[test]
    fn embedded_newline_then_long_line() {
        let text = format!("SHORT\n{}", "F".repeat(80));
        let folded = fold_line(&text);

        let lines: Vec<&str> = folded.split('\n').collect();
        assert_eq!(lines[0], "SHORT");
        assert_eq!(lines[1].len(), 75);
        assert_eq!(lines[2], format!(" {}", "F".repeat(5)));
    }

    #[test]
    fn fold_respects_utf8() {
        let line = format!("DESCRIPTION:{}", "日".repeat(100));
        let folded = fold_line(&line);

        for segment in folded.split('\n') {
            assert!(segment.chars().count() <= 75);
        }
        assert_eq!(unfold(&folded), line);
    }

    #[test]
    fn custom_width() {
        let folded = fold_line_to("abcdefghij", 4);
        assert_eq!(folded, "abcd\n efg\n hij");
    }
}
