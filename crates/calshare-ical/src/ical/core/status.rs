//! Attendee participation status (RFC 5545 §3.2.12).

/// Participation status of an attendee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParticipationStatus {
    Accepted,
    Declined,
    Tentative,
    /// No response yet; also used for any status without a direct token.
    #[default]
    NeedsAction,
}

impl ParticipationStatus {
    /// Maps an attendee status code from the calendar data model.
    ///
    /// Codes: 0 none, 1 accepted, 2 declined, 3 invited, 4 tentative. Anything other
    /// than accepted, declined or tentative needs action.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Accepted,
            2 => Self::Declined,
            4 => Self::Tentative,
            _ => Self::NeedsAction,
        }
    }

    /// Parses a PARTSTAT token (case-insensitive). Unknown tokens need action.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_uppercase().as_str() {
            "ACCEPTED" => Self::Accepted,
            "DECLINED" => Self::Declined,
            "TENTATIVE" => Self::Tentative,
            _ => Self::NeedsAction,
        }
    }

    /// Returns the PARTSTAT token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "ACCEPTED",
            Self::Declined => "DECLINED",
            Self::Tentative => "TENTATIVE",
            Self::NeedsAction => "NEEDS-ACTION",
        }
    }
}

impl std::fmt::Display for ParticipationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tokens() {
        assert_eq!(ParticipationStatus::Accepted.as_str(), "ACCEPTED");
        assert_eq!(ParticipationStatus::Declined.as_str(), "DECLINED");
        assert_eq!(ParticipationStatus::Tentative.as_str(), "TENTATIVE");
        assert_eq!(ParticipationStatus::NeedsAction.as_str(), "NEEDS-ACTION");
        assert_eq!(ParticipationStatus::default().to_string(), "NEEDS-ACTION");
    }

    #[test]
    fn status_from_code() {
        assert_eq!(ParticipationStatus::from_code(0), ParticipationStatus::NeedsAction);
        assert_eq!(ParticipationStatus::from_code(1), ParticipationStatus::Accepted);
        assert_eq!(ParticipationStatus::from_code(2), ParticipationStatus::Declined);
        assert_eq!(ParticipationStatus::from_code(3), ParticipationStatus::NeedsAction);
        assert_eq!(ParticipationStatus::from_code(4), ParticipationStatus::Tentative);
        assert_eq!(ParticipationStatus::from_code(-7), ParticipationStatus::NeedsAction);
    }

    #[test]
    fn status_parse() {
        assert_eq!(ParticipationStatus::parse("accepted"), ParticipationStatus::Accepted);
        assert_eq!(ParticipationStatus::parse("DECLINED"), ParticipationStatus::Declined);
        assert_eq!(ParticipationStatus::parse("Tentative"), ParticipationStatus::Tentative);
        assert_eq!(ParticipationStatus::parse("DELEGATED"), ParticipationStatus::NeedsAction);
        assert_eq!(ParticipationStatus::parse(""), ParticipationStatus::NeedsAction);
    }
}
