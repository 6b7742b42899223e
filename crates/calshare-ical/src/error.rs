use thiserror::Error;

use crate::ical::parse::ParseError;

/// Codec errors
#[derive(Error, Debug)]
pub enum IcalError {
    #[error("Invalid component: {0}")]
    InvalidComponent(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type IcalResult<T> = std::result::Result<T, IcalError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ical::parse::ParseErrorKind;

    #[test]
    fn parse_errors_pass_through() {
        let err: IcalError = ParseError::new(ParseErrorKind::MissingEnd, 3, 1).into();
        assert!(matches!(err, IcalError::Parse(_)));
        assert_eq!(err.to_string(), "missing END line at line 3, column 1");
    }
}
