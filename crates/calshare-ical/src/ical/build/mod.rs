//! iCalendar serialization helpers.
//!
//! - Escape: text value cleansing and parameter value quoting
//! - Fold: content line folding at 75 characters

mod escape;
mod fold;

pub use escape::{cleanse_text, escape_param_value, uncleanse_text};
pub use fold::{fold_line, fold_line_to};
