//! Lenient date handling for vendor payloads.
//!
//! The vendor sends optional dates as empty strings and timestamps in more
//! than one layout.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Optional date: blank or unparseable values become `None`.
pub(crate) fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok()))
}

/// Required timestamp in any of the layouts the vendor uses.
pub(crate) fn vendor_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_vendor_datetime(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", raw)))
}

fn parse_vendor_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vendor_datetime_layouts() {
        let expected = NaiveDate::from_ymd_opt(2025, 2, 3)
            .unwrap()
            .and_hms_opt(21, 5, 14)
            .unwrap();
        assert_eq!(parse_vendor_datetime("2025-02-03 21:05:14"), Some(expected));
        assert_eq!(parse_vendor_datetime("2025-02-03T21:05:14"), Some(expected));
        assert_eq!(parse_vendor_datetime("2025-02-03T21:05:14Z"), Some(expected));
        assert_eq!(parse_vendor_datetime("yesterday"), None);
    }
}
