//! The `YYYYMMDD` date wire format shared by the store, the CLI and the engine.

use chrono::NaiveDate;
use thiserror::Error;

/// Canonical storage and wire format of a task date.
pub const DATE_FORMAT: &str = "%Y%m%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date: {0}")]
pub struct ParseDateError(pub String);

/// Parses an 8-digit `YYYYMMDD` string into a calendar date.
///
/// Separators, signs and surrounding whitespace are rejected, as are
/// impossible calendar days such as `20230229`.
pub fn parse_date(s: &str) -> Result<NaiveDate, ParseDateError> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseDateError(s.to_string()));
    }

    // All eight bytes are ASCII digits, so the slices and numeric parses cannot fail.
    let year: i32 = s[0..4].parse().map_err(|_| ParseDateError(s.to_string()))?;
    let month: u32 = s[4..6].parse().map_err(|_| ParseDateError(s.to_string()))?;
    let day: u32 = s[6..8].parse().map_err(|_| ParseDateError(s.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| ParseDateError(s.to_string()))
}

/// Formats a date as `YYYYMMDD`.
#[inline]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter for `NaiveDate` fields carried as `YYYYMMDD` strings.
///
/// Use with `#[serde(with = "scheduler_core::date::yyyymmdd")]`.
pub mod yyyymmdd {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(de::Error::custom)
    }
}
