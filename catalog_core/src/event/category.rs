use crate::filter::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed classification of a department event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Seminar,
    Workshop,
    Conference,
    Announcement,
}

impl EventCategory {
    /// Every category, in the order the events page offers them
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Seminar,
        EventCategory::Workshop,
        EventCategory::Conference,
        EventCategory::Announcement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::Seminar => "seminar",
            EventCategory::Workshop => "workshop",
            EventCategory::Conference => "conference",
            EventCategory::Announcement => "announcement",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = FilterError;

    /// Exact, case-sensitive match on the wire value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| FilterError::InvalidCategory(s.to_string()))
    }
}
