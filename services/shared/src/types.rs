/// Type-safe wrappers for domain primitives
///
/// These types enforce validation at construction time so a value that made it
/// into a `Bet` never needs to be re-checked downstream.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::constants::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Bet ID must not be empty")]
    EmptyBetId,

    #[error("Bet ID too long: {length} chars (max {max})")]
    BetIdTooLong { length: usize, max: usize },

    #[error("Invalid creation date: {0}")]
    InvalidCreationDate(String),

    #[error("Invalid number pair: {0:?}")]
    InvalidPair(String),
}

/// Opaque bet identifier
///
/// Generated ids are hyphenated v4 UUIDs, but any non-empty string within
/// `MAX_BET_ID_LENGTH` is accepted so stored records stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BetId(String);

impl BetId {
    /// Create a new BetId from a UUID
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }

    /// Get the inner string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the inner string, consuming self
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for BetId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyBetId);
        }

        if value.len() > MAX_BET_ID_LENGTH {
            return Err(ValidationError::BetIdTooLong {
                length: value.len(),
                max: MAX_BET_ID_LENGTH,
            });
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for BetId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<BetId> for String {
    fn from(id: BetId) -> Self {
        id.0
    }
}

impl fmt::Display for BetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO-8601 creation instant
///
/// Keeps the exact text it was built from, so a stored date reads back
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CreationDate(String);

impl CreationDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parsed instant, normalized to UTC
    pub fn instant(&self) -> DateTime<Utc> {
        // Construction guarantees the string parses
        DateTime::parse_from_rfc3339(&self.0)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_default()
    }

    /// Milliseconds since the Unix epoch, used as an ordering score
    pub fn timestamp_millis(&self) -> i64 {
        self.instant().timestamp_millis()
    }
}

impl From<DateTime<Utc>> for CreationDate {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl TryFrom<String> for CreationDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DateTime::parse_from_rfc3339(&value)
            .map_err(|_| ValidationError::InvalidCreationDate(value.clone()))?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for CreationDate {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<CreationDate> for String {
    fn from(date: CreationDate) -> Self {
        date.0
    }
}

impl fmt::Display for CreationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two-digit number pair, "00" through "99"
///
/// Ordering is numeric, which for zero-padded text is the same as
/// lexicographic ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pair(u8);

impl Pair {
    /// Build a pair from two ASCII digits
    pub fn from_digits(tens: u8, units: u8) -> Option<Self> {
        if !tens.is_ascii_digit() || !units.is_ascii_digit() {
            return None;
        }
        Some(Self((tens - b'0') * 10 + (units - b'0')))
    }

    /// Every pair in ascending order
    pub fn all() -> impl Iterator<Item = Pair> {
        (0..PAIR_COUNT as u8).map(Pair)
    }
}

impl FromStr for Pair {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [tens, units] => Self::from_digits(*tens, *units),
            _ => None,
        }
        .ok_or_else(|| ValidationError::InvalidPair(s.to_string()))
    }
}

impl TryFrom<String> for Pair {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pair> for String {
    fn from(pair: Pair) -> Self {
        pair.to_string()
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bet_id_from_uuid_keeps_hyphens() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = BetId::new(uuid);
        assert_eq!(id.as_str(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_bet_id_validation() {
        assert_eq!(BetId::try_from(""), Err(ValidationError::EmptyBetId));
        assert_eq!(BetId::try_from("   "), Err(ValidationError::EmptyBetId));

        let long_id = "a".repeat(MAX_BET_ID_LENGTH + 1);
        assert!(matches!(
            BetId::try_from(long_id),
            Err(ValidationError::BetIdTooLong { length: 65, max: 64 })
        ));

        assert!(BetId::try_from("bet-1").is_ok());
    }

    #[test]
    fn test_bet_id_serializes_as_plain_string() {
        let id = BetId::try_from("abc-123").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-123\"");

        let parsed: BetId = serde_json::from_str("\"abc-123\"").unwrap();
        assert_eq!(parsed, id);
        assert!(serde_json::from_str::<BetId>("\"\"").is_err());
    }

    #[test]
    fn test_creation_date_renders_millis_with_z() {
        let instant = DateTime::parse_from_rfc3339("2024-03-05T10:20:30.123456Z")
            .unwrap()
            .with_timezone(&Utc);
        let date = CreationDate::from(instant);
        assert_eq!(date.as_str(), "2024-03-05T10:20:30.123Z");
    }

    #[test]
    fn test_creation_date_keeps_original_text() {
        let date = CreationDate::try_from("2024-03-05T12:20:30+02:00").unwrap();
        assert_eq!(date.as_str(), "2024-03-05T12:20:30+02:00");
        assert_eq!(date.instant().to_rfc3339(), "2024-03-05T10:20:30+00:00");
    }

    #[test]
    fn test_creation_date_rejects_garbage() {
        assert!(matches!(
            CreationDate::try_from("yesterday"),
            Err(ValidationError::InvalidCreationDate(_))
        ));
        assert!(CreationDate::try_from("").is_err());
    }

    #[test]
    fn test_pair_parsing() {
        assert_eq!("07".parse::<Pair>().unwrap().to_string(), "07");
        assert_eq!("99".parse::<Pair>().unwrap().to_string(), "99");
        assert!("7".parse::<Pair>().is_err());
        assert!("100".parse::<Pair>().is_err());
        assert!("a1".parse::<Pair>().is_err());
        assert!("".parse::<Pair>().is_err());
    }

    #[test]
    fn test_pair_from_digits() {
        assert_eq!(Pair::from_digits(b'0', b'3').unwrap().to_string(), "03");
        assert_eq!(Pair::from_digits(b'4', b'2').unwrap().to_string(), "42");
        assert!(Pair::from_digits(b'x', b'2').is_none());
    }

    #[test]
    fn test_pair_all_is_ascending_full_range() {
        let all: Vec<String> = Pair::all().map(|p| p.to_string()).collect();
        assert_eq!(all.len(), PAIR_COUNT);
        assert_eq!(all.first().map(String::as_str), Some("00"));
        assert_eq!(all.last().map(String::as_str), Some("99"));

        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
    }
}
