use crate::shared::error::HarvestError;
use crate::shared::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Offset-less date-time layouts tried after RFC 3339, most common first
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-time layouts with an explicit `+hh:mm` offset that RFC 3339 rejects
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Calendar date a release was published, derived from the feed timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReleaseDate(NaiveDate);

impl ReleaseDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses an ISO-8601 feed timestamp into its date.
    ///
    /// Timestamps carrying an offset (`Z`, `+00:00`, ...) yield the calendar
    /// date in that offset. Otherwise a trailing `Z` is stripped and the
    /// value is read as naive UTC: seconds with optional fraction, minute-only
    /// times, a space instead of `T`, and bare `YYYY-MM-DD` dates are accepted.
    pub fn parse(timestamp: &str) -> Result<Self> {
        if let Ok(datetime) = DateTime::parse_from_rfc3339(timestamp) {
            return Ok(Self(datetime.date_naive()));
        }

        for format in OFFSET_DATETIME_FORMATS {
            if let Ok(datetime) = DateTime::parse_from_str(timestamp, format) {
                return Ok(Self(datetime.date_naive()));
            }
        }

        let trimmed = timestamp.strip_suffix('Z').unwrap_or(timestamp);
        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(datetime.date()));
            }
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| {
                HarvestError::InvalidTimestamp {
                    value: timestamp.to_string(),
                    details: e.to_string(),
                }
                .into()
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
