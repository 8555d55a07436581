//! Wire codec for Harvest's date-only fields.
//!
//! Harvest uses two time formats: full RFC 3339 timestamps (modeled with
//! `chrono::DateTime<Utc>`) and bare calendar dates like `"2022-12-01"` for
//! fields such as `spent_date` and `issue_date`. [`HarvestDate`] enforces the
//! latter.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date serialized as `YYYY-MM-DD`.
///
/// No timezone is attached; a decoded value represents the named calendar
/// day. Round-tripping through JSON yields the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HarvestDate(pub NaiveDate);

impl HarvestDate {
    /// Create a date from year, month, and day.
    ///
    /// Returns `None` for out-of-range components (e.g. month 13).
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl From<NaiveDate> for HarvestDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for HarvestDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for HarvestDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map(Self)
    }
}

impl Serialize for HarvestDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(DATE_FORMAT))
    }
}

impl<'de> Deserialize<'de> for HarvestDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DateVisitor;

        impl Visitor<'_> for DateVisitor {
            type Value = HarvestDate;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a date string in YYYY-MM-DD format")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<HarvestDate, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DateVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_plain_date() {
        let date = HarvestDate::from_ymd(2022, 12, 1).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2022-12-01\"");
    }

    #[test]
    fn round_trip_preserves_calendar_date() {
        let date = HarvestDate::from_ymd(2022, 12, 1).unwrap();
        let wire = serde_json::to_string(&date).unwrap();
        let back: HarvestDate = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, date);
    }

    #[test]
    fn rejects_timestamps_and_garbage() {
        assert!(serde_json::from_str::<HarvestDate>("\"2022-12-01T00:00:00Z\"").is_err());
        assert!(serde_json::from_str::<HarvestDate>("\"12/01/2022\"").is_err());
        assert!(serde_json::from_str::<HarvestDate>("\"not a date\"").is_err());
    }

    #[test]
    fn display_matches_wire_format() {
        let date: HarvestDate = "2024-02-29".parse().unwrap();
        assert_eq!(date.to_string(), "2024-02-29");
    }
}
