//! The event filter engine.
//!
//! Filtering is a pure function of the collection, the two filter values and
//! an explicit reference day. Nothing is cached between calls.

use crate::event::{Event, EventCategory};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Invalid category filter: {0:?} (expected all, seminar, workshop, conference or announcement)")]
    InvalidCategory(String),

    #[error("Invalid date filter: {0:?} (expected upcoming, past or all)")]
    InvalidTemporal(String),
}

/// Category restriction; `All` is the sentinel for "no restriction"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(EventCategory),
}

impl CategoryFilter {
    pub fn matches(self, event: &Event) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => event.category == category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl From<EventCategory> for CategoryFilter {
    fn from(category: EventCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse::<EventCategory>().map(CategoryFilter::Only)
    }
}

/// Selection of events relative to the reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemporalFilter {
    /// On or after the reference day
    #[default]
    Upcoming,
    /// Strictly before the reference day
    Past,
    All,
}

impl TemporalFilter {
    pub const ALL: [TemporalFilter; 3] = [
        TemporalFilter::Upcoming,
        TemporalFilter::Past,
        TemporalFilter::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemporalFilter::Upcoming => "upcoming",
            TemporalFilter::Past => "past",
            TemporalFilter::All => "all",
        }
    }

    /// Whether an event on `day` passes. Unparseable days only pass `All`.
    pub fn matches(self, day: Option<NaiveDate>, reference: NaiveDate) -> bool {
        match (self, day) {
            (TemporalFilter::All, _) => true,
            (TemporalFilter::Upcoming, Some(day)) => day >= reference,
            (TemporalFilter::Past, Some(day)) => day < reference,
            (_, None) => false,
        }
    }
}

impl fmt::Display for TemporalFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemporalFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        TemporalFilter::ALL
            .into_iter()
            .find(|temporal| temporal.as_str() == s)
            .ok_or_else(|| FilterError::InvalidTemporal(s.to_string()))
    }
}

/// The user's current filter choices. Each selection replaces the previous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub category: CategoryFilter,
    pub temporal: TemporalFilter,
}

impl FilterSelection {
    pub fn new(category: CategoryFilter, temporal: TemporalFilter) -> Self {
        Self { category, temporal }
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn select_temporal(&mut self, temporal: TemporalFilter) {
        self.temporal = temporal;
    }

    pub fn apply<'a>(&self, events: &'a [Event], reference: NaiveDate) -> Vec<&'a Event> {
        filter_events(events, self.category, self.temporal, reference)
    }
}

/// Filter `events` by category, then by day relative to `reference`, then
/// order the survivors by day ascending.
///
/// Events sharing a day keep their input order. Events whose date does not
/// parse survive only `TemporalFilter::All` and sort after every valid day.
pub fn filter_events<'a>(
    events: &'a [Event],
    category: CategoryFilter,
    temporal: TemporalFilter,
    reference: NaiveDate,
) -> Vec<&'a Event> {
    let mut keyed: Vec<(Option<NaiveDate>, &'a Event)> = events
        .iter()
        .filter(|event| category.matches(event))
        .map(|event| (event.day(), event))
        .filter(|(day, _)| temporal.matches(*day, reference))
        .collect();

    // `sort_by_key` is stable; `None` days compare greater than any valid day.
    keyed.sort_by_key(|(day, _)| (day.is_none(), *day));

    debug!(
        category = %category,
        temporal = %temporal,
        reference = %reference,
        total = events.len(),
        matched = keyed.len(),
        "Filtered events"
    );

    keyed.into_iter().map(|(_, event)| event).collect()
}

/// String boundary over [`filter_events`]: both filter values are validated
/// before anything is filtered.
pub fn filter_by_names<'a>(
    events: &'a [Event],
    category: &str,
    temporal: &str,
    reference: NaiveDate,
) -> Result<Vec<&'a Event>> {
    let category = category.parse::<CategoryFilter>()?;
    let temporal = temporal.parse::<TemporalFilter>()?;
    Ok(filter_events(events, category, temporal, reference))
}

#[cfg(test)]
mod tests;
