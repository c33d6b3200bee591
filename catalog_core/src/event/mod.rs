mod category;

pub use category::EventCategory;

use chrono::{DateTime, NaiveDate};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire format of an event date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifier of an event record, numeric or textual depending on the source
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Numeric(i64),
    Text(String),
}

impl EventId {
    /// Parse a user-supplied id, preferring the numeric form
    pub fn parse(raw: &str) -> Self {
        raw.parse::<i64>()
            .map(EventId::Numeric)
            .unwrap_or_else(|_| EventId::Text(raw.to_string()))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Numeric(n) => write!(f, "{}", n),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        EventId::Numeric(n)
    }
}

impl From<i32> for EventId {
    fn from(n: i32) -> Self {
        EventId::Numeric(i64::from(n))
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId::Text(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        EventId::Text(s)
    }
}

/// A single department happening
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,

    pub title: String,

    #[serde(alias = "type")]
    pub category: EventCategory,

    /// Calendar day as `YYYY-MM-DD`; kept verbatim so malformed values survive loading
    #[serde(deserialize_with = "date_string")]
    pub date: String,

    /// Display-only time range, e.g. "2:00 PM - 4:00 PM" or "All Day"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl Event {
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        category: EventCategory,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            date: date.into(),
            time: String::new(),
            location: String::new(),
            description: String::new(),
            speaker: None,
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    /// The event's calendar day, or `None` when `date` does not parse.
    ///
    /// Full RFC 3339 timestamps are accepted and truncated to their day.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }
}

pub(crate) fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Nullable record-store columns arrive as `null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a date string, or a native TOML date/datetime reduced to its day
fn date_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct DateVisitor;

    impl<'de> Visitor<'de> for DateVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a date string or a TOML date")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        // toml hands datetimes over as a single-entry map holding the raw text
        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<String, A::Error> {
            let (_, raw) = map
                .next_entry::<String, String>()?
                .ok_or_else(|| de::Error::custom("empty date value"))?;
            let datetime: toml::value::Datetime = raw.parse().map_err(de::Error::custom)?;
            Ok(match datetime.date {
                Some(date) => format!("{:04}-{:02}-{:02}", date.year, date.month, date.day),
                None => raw,
            })
        }
    }

    deserializer.deserialize_any(DateVisitor)
}
