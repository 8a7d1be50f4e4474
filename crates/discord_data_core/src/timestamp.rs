//! Export timestamps that keep their naive or offset-aware state.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use discord_data_error::{DiscordDataResult, ParseError, ParseErrorKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A date-time exactly as the export recorded it.
///
/// Discord exports mix offset-aware values (`2021-01-01T00:00:00.000Z`) with
/// naive ones. Both are kept as-is: no conversion to UTC, no offset invented
/// for naive values.
///
/// # Examples
///
/// ```
/// use discord_data_core::Timestamp;
///
/// let ts = Timestamp::parse("2020-06-14 02:35:55.123000+00:00").unwrap();
/// assert!(!ts.is_naive());
/// assert_eq!(ts.to_iso8601(), "2020-06-14T02:35:55.123+00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From)]
pub enum Timestamp {
    /// Date-time without an offset
    Naive(NaiveDateTime),
    /// Date-time carrying its own UTC offset
    Offset(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Parse a timestamp in one of the forms found in Discord exports.
    ///
    /// Accepts:
    /// - RFC 3339: `2021-01-01T00:00:00.000Z`, `2021-01-01T02:00:00+02:00`
    /// - `messages.csv` style: `2020-06-14 02:35:55.123000+00:00`
    /// - Without offset (`T` or space separator): `2020-06-14T02:35:55`
    ///
    /// Surrounding double quotes, as found in activity exports, are ignored.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the string matches none of the formats.
    #[track_caller]
    pub fn parse(raw: &str) -> DiscordDataResult<Self> {
        let s = raw.trim().trim_matches('"');

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::Offset(dt));
        }
        for format in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(s, format) {
                return Ok(Self::Offset(dt));
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Self::Naive(dt));
            }
        }

        tracing::debug!(raw, "Timestamp matched no known export format");
        Err(ParseError::new(ParseErrorKind::InvalidTimestamp(raw.to_string())).into())
    }

    /// True if the value carries no UTC offset.
    pub fn is_naive(&self) -> bool {
        matches!(self, Self::Naive(_))
    }

    /// ISO-8601 rendering; fractional seconds appear only when non-zero.
    pub fn to_iso8601(&self) -> String {
        match self {
            Self::Naive(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            Self::Offset(dt) => dt.to_rfc3339(),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Offset(dt.fixed_offset())
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_naive_keeps_no_offset() {
        let dt = NaiveDate::from_ymd_opt(2020, 6, 14)
            .unwrap()
            .and_hms_opt(2, 35, 55)
            .unwrap();
        let ts = Timestamp::from(dt);
        assert!(ts.is_naive());
        assert_eq!(ts.to_iso8601(), "2020-06-14T02:35:55");
    }

    #[test]
    fn test_quoted_activity_timestamp() {
        let ts = Timestamp::parse("\"2021-01-01T00:00:00.000Z\"").unwrap();
        assert_eq!(ts.to_iso8601(), "2021-01-01T00:00:00+00:00");
    }
}
