//! Timestamp (de)serialization tolerant of the backend's naive datetimes.
//!
//! The API emits UTC instants either as RFC 3339 (`2024-05-01T09:30:00Z`) or as a
//! bare ISO datetime without an offset (`2024-05-01T09:30:00.123456`). A missing
//! offset means UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(_) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()),
    }
}

pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&dt.to_rfc3339())
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(d)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(dt: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => super::serialize(dt, s),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|raw| parse(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_naive_timestamps_are_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        assert_eq!(parse("2024-05-01T09:30:00").unwrap(), expected);
        assert_eq!(parse("2024-05-01T09:30:00Z").unwrap(), expected);
        assert_eq!(parse("2024-05-01T11:30:00+02:00").unwrap(), expected);
        assert_eq!(
            parse("2024-05-01T09:30:00.250000").unwrap(),
            expected + chrono::Duration::milliseconds(250)
        );
        assert!(parse("yesterday").is_err());
    }
}
