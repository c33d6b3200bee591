use crate::error::{CatalogError, Result};
use crate::event::{Event, EventId};
use crate::filter::FilterSelection;
use crate::source::ContentSource;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// A data-quality problem in a loaded collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataIssue {
    MalformedDate { id: EventId, date: String },
    DuplicateId { id: EventId },
    EmptyTitle { id: EventId },
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataIssue::MalformedDate { id, date } => {
                write!(f, "event {} has an unparseable date {:?}", id, date)
            }
            DataIssue::DuplicateId { id } => write!(f, "event id {} appears more than once", id),
            DataIssue::EmptyTitle { id } => write!(f, "event {} has an empty title", id),
        }
    }
}

/// An event collection as handed over by a content source, in load order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// One-shot fetch of the whole collection from `source`
    pub async fn fetch(source: &dyn ContentSource) -> Result<Self> {
        debug!("Loading events from {}", source.describe());
        let events = source.fetch_events().await?;
        Ok(Self::new(events))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Look up a user-supplied id, numeric form first
    pub fn lookup(&self, raw_id: &str) -> Result<&Event> {
        self.get(&EventId::parse(raw_id))
            .ok_or_else(|| CatalogError::NotFound(raw_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn filter(&self, selection: &FilterSelection, reference: NaiveDate) -> Vec<&Event> {
        selection.apply(&self.events, reference)
    }

    /// Every data-quality issue, in load order
    pub fn issues(&self) -> Vec<DataIssue> {
        let mut seen = HashSet::new();
        let mut issues = Vec::new();
        for event in &self.events {
            if !seen.insert(&event.id) {
                issues.push(DataIssue::DuplicateId {
                    id: event.id.clone(),
                });
            }
            if event.title.trim().is_empty() {
                issues.push(DataIssue::EmptyTitle {
                    id: event.id.clone(),
                });
            }
            if event.day().is_none() {
                issues.push(DataIssue::MalformedDate {
                    id: event.id.clone(),
                    date: event.date.clone(),
                });
            }
        }
        issues
    }
}

impl From<Vec<Event>> for EventCatalog {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}
