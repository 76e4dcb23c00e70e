//! Date fields as the web front end sends them.
//!
//! An unpicked date input arrives as `""`; it means "no date", same as
//! `null` or a missing field. Full timestamps are cut to their date.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, de::Error};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `deserialize_with` target for `Option<NaiveDate>` request fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map(Some)
        .map_err(|_| D::Error::custom(format!("invalid date '{}', expected YYYY-MM-DD", raw)))
}
