use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

use ::uuid::Uuid;

/// Identifier of a stored donation record, always in canonical form.
///
/// # Construction
/// - [`DonationId::new`] generates a new identifier (used when a record is created).
/// - [`DonationId::parse`] validates an externally supplied identifier.
///
/// # Display format
/// Always the canonical 32-character lowercase hex form without hyphens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DonationId(Uuid);

impl Default for DonationId {
    fn default() -> Self {
        Self::new()
    }
}

impl DonationId {
    /// Generates a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses an identifier that must already be in canonical form.
    ///
    /// Hyphenated or uppercase UUIDs are **not** normalised. Two spellings of the same UUID
    /// would otherwise address the same record, which the store never promises.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is not in canonical form.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if !Self::is_canonical(input) {
            return Err(UuidError::InvalidInput(format!(
                "donation id must be 32 lowercase hex characters without hyphens, got: '{}'",
                input
            )));
        }
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| UuidError::InvalidInput(format!("invalid donation id '{}': {}", input, e)))
    }

    /// Returns true if `input` is in canonical form.
    ///
    /// Purely syntactic: exactly 32 bytes, all of them lowercase hex digits.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl fmt::Display for DonationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for DonationId {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DonationId::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DonationId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DonationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DonationId::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_generates_canonical_id() {
        let id = DonationId::new();
        let canonical = id.to_string();

        assert_eq!(canonical.len(), 32);
        assert!(DonationId::is_canonical(&canonical));
    }

    #[test]
    fn test_new_ids_are_distinct() {
        let ids: HashSet<DonationId> = (0..1_000).map(|_| DonationId::new()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn test_parse_valid_canonical_id() {
        let canonical = "550e8400e29b41d4a716446655440000";
        let id = DonationId::parse(canonical).unwrap();

        assert_eq!(id.to_string(), canonical);
        assert_eq!(canonical.parse::<DonationId>().unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_hyphenated_id() {
        let result = DonationId::parse("550e8400-e29b-41d4-a716-446655440000");

        match result {
            Err(UuidError::InvalidInput(msg)) => {
                assert!(msg.contains("32 lowercase hex characters"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_parse_rejects_non_canonical_input() {
        assert!(DonationId::parse("550E8400E29B41D4A716446655440000").is_err());
        assert!(DonationId::parse("550e8400e29b41d4a71644665544000").is_err());
        assert!(DonationId::parse("550e8400e29b41d4a7164466554400000").is_err());
        assert!(DonationId::parse("550e8400e29b41d4a716446655440zzz").is_err());
        assert!(DonationId::parse("1700000000000").is_err());
        assert!(DonationId::parse("").is_err());
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let id = DonationId::parse("550e8400e29b41d4a716446655440000").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400e29b41d4a716446655440000\"");

        let back: DonationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
