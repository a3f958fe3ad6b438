//! Validated domain types shared across the donation workspace.
//!
//! The compatibility engine in `donation-core` deliberately works on raw strings. The types in
//! this crate are for boundaries that want to reject anything outside the eight ABO/Rh groups
//! before asking the engine.

use std::{fmt, str::FromStr};

/// Errors that can occur when parsing a blood type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BloodTypeError {
    /// The input did not name one of the eight ABO/Rh blood types
    #[error("unrecognised blood type '{0}'")]
    Unrecognised(String),
}

/// One of the eight ABO/Rh blood types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloodType {
    ONegative,
    OPositive,
    ANegative,
    APositive,
    BNegative,
    BPositive,
    AbNegative,
    AbPositive,
}

impl BloodType {
    /// Every blood type, negative before positive within each group.
    pub const ALL: [BloodType; 8] = [
        BloodType::ONegative,
        BloodType::OPositive,
        BloodType::ANegative,
        BloodType::APositive,
        BloodType::BNegative,
        BloodType::BPositive,
        BloodType::AbNegative,
        BloodType::AbPositive,
    ];

    /// Parses a blood type from user input.
    ///
    /// Leading and trailing whitespace is ignored and matching is case-insensitive, so
    /// `" ab+ "` parses as [`BloodType::AbPositive`].
    ///
    /// # Errors
    ///
    /// Returns [`BloodTypeError::Unrecognised`] with the original input if it does not name
    /// one of the eight types.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, BloodTypeError> {
        let raw = input.as_ref();
        let normalised = raw.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalised)
            .ok_or_else(|| BloodTypeError::Unrecognised(raw.to_owned()))
    }

    /// Returns the canonical uppercase spelling, e.g. `"AB-"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodType::ONegative => "O-",
            BloodType::OPositive => "O+",
            BloodType::ANegative => "A-",
            BloodType::APositive => "A+",
            BloodType::BNegative => "B-",
            BloodType::BPositive => "B+",
            BloodType::AbNegative => "AB-",
            BloodType::AbPositive => "AB+",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = BloodTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for BloodType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl serde::Serialize for BloodType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for BloodType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BloodType::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_every_canonical_spelling() {
        for t in BloodType::ALL {
            assert_eq!(BloodType::parse(t.as_str()).unwrap(), t);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(BloodType::parse("ab+").unwrap(), BloodType::AbPositive);
        assert_eq!(BloodType::parse("  o- ").unwrap(), BloodType::ONegative);
        assert_eq!("b+".parse::<BloodType>().unwrap(), BloodType::BPositive);
    }

    #[test]
    fn test_parse_rejects_unknown_types() {
        let err = BloodType::parse("C+").expect_err("should reject C+");
        assert_eq!(err, BloodTypeError::Unrecognised("C+".into()));
        assert_eq!(err.to_string(), "unrecognised blood type 'C+'");

        assert!(BloodType::parse("").is_err());
        assert!(BloodType::parse("AB").is_err());
        assert!(BloodType::parse("A +").is_err());
    }

    #[test]
    fn test_display_uses_canonical_spelling() {
        assert_eq!(BloodType::AbNegative.to_string(), "AB-");
        assert_eq!(BloodType::OPositive.to_string(), "O+");
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let json = serde_json::to_string(&BloodType::APositive).unwrap();
        assert_eq!(json, "\"A+\"");

        let parsed: BloodType = serde_json::from_str("\"a-\"").unwrap();
        assert_eq!(parsed, BloodType::ANegative);

        assert!(serde_json::from_str::<BloodType>("\"Z+\"").is_err());
    }
}
