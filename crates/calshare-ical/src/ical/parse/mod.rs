//! iCalendar parsing primitives.
//!
//! - Lexer: line unfolding and content line tokenizing
//! - Error: positional parse errors
//!
//! Component-level parsing lives next to each component in `core`.

mod error;
mod lexer;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{parse_content_line, unfold_lines};
