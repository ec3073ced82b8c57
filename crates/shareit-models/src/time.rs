//! Serde formats for the naive wall-clock timestamps on the wire.
//!
//! Output is second precision (`2024-05-01T10:00:00`); input accepts any
//! ISO-8601 local datetime, with or without fractional seconds.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

const SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3f";

fn parse<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<NaiveDateTime>().map_err(serde::de::Error::custom)
}

pub mod seconds {
    use super::*;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(SECONDS))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse(deserializer)
    }
}

pub mod millis {
    use super::*;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(MILLIS))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse(deserializer)
    }
}

/// Optional timestamp in request bodies; a missing key is `None`.
pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(&v.format(SECONDS)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| s.parse::<NaiveDateTime>().map_err(serde::de::Error::custom))
            .transpose()
    }
}
