//! GST identification numbers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use tallygen_core::{DomainError, ValueObject};

/// GST state codes for the jurisdictions the built-in profiles trade with.
///
/// States missing from this table are accepted without a prefix check.
const STATE_CODES: &[(&str, u8)] = &[
    ("Delhi", 7),
    ("Haryana", 6),
    ("Uttar Pradesh", 9),
    ("Gujarat", 24),
    ("Maharashtra", 27),
    ("Karnataka", 29),
    ("Kerala", 32),
    ("Tamil Nadu", 33),
    ("Telangana", 36),
];

/// Numeric GST state code for a state name, if known.
pub fn state_code(state: &str) -> Option<u8> {
    STATE_CODES
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, code)| *code)
}

/// A 15-character GST identification number, e.g. `27AAACT1234C1Z5`.
///
/// The first two characters are the registering state's numeric code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gstin(String);

impl ValueObject for Gstin {}

impl Gstin {
    pub const LEN: usize = 15;

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.len() != Self::LEN {
            return Err(DomainError::validation(format!(
                "GSTIN {raw:?} must be {} characters",
                Self::LEN
            )));
        }
        if !raw.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()) {
            return Err(DomainError::validation(format!(
                "GSTIN {raw:?} must be uppercase alphanumeric"
            )));
        }
        if !raw[..2].chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "GSTIN {raw:?} must start with a two-digit state code"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-digit state code prefix.
    pub fn state_code(&self) -> u8 {
        // Both bytes are ASCII digits (checked in `parse`).
        let bytes = self.0.as_bytes();
        (bytes[0] - b'0') * 10 + (bytes[1] - b'0')
    }

    /// Whether this GSTIN could have been issued in `state`.
    ///
    /// Unknown states always match.
    pub fn matches_state(&self, state: &str) -> bool {
        state_code(state).is_none_or(|code| code == self.state_code())
    }
}

impl FromStr for Gstin {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Gstin {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Gstin> for String {
    fn from(value: Gstin) -> Self {
        value.0
    }
}

impl core::fmt::Display for Gstin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_gstin_and_exposes_state_code() {
        let gstin = Gstin::parse("27AAACT1234C1Z5").unwrap();
        assert_eq!(gstin.state_code(), 27);
        assert_eq!(gstin.as_str(), "27AAACT1234C1Z5");
        assert!(gstin.matches_state("Maharashtra"));
        assert!(!gstin.matches_state("Delhi"));
    }

    #[test]
    fn single_digit_state_codes_are_zero_padded() {
        let gstin: Gstin = "07AAACT5678C1Z3".parse().unwrap();
        assert_eq!(gstin.state_code(), 7);
        assert!(gstin.matches_state("Delhi"));
    }

    #[test]
    fn unknown_state_is_not_checked() {
        let gstin = Gstin::parse("19AAACT5678C1Z3").unwrap();
        assert!(gstin.matches_state("West Bengal"));
    }

    #[test]
    fn rejects_malformed_values() {
        for raw in ["", "27AAACT1234C1Z", "27aaact1234c1z5", "XXAAACT1234C1Z5", "27AAACT-234C1Z5"] {
            match Gstin::parse(raw) {
                Err(DomainError::Validation(_)) => {}
                other => panic!("expected validation error for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn string_conversion_goes_through_parse() {
        assert!(Gstin::try_from("27AAACT1234C1Z5".to_string()).is_ok());
        assert!(Gstin::try_from("nope".to_string()).is_err());
        let back: String = Gstin::parse("29AAACS9012E1Z1").unwrap().into();
        assert_eq!(back, "29AAACS9012E1Z1");
    }
}
