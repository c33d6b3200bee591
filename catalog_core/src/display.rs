//! Presentation helpers. The filter engine returns raw records; everything
//! human-readable is produced here.

use crate::event::{Event, EventCategory};
use crate::filter::{CategoryFilter, TemporalFilter};
use serde::Serialize;

pub const EMPTY_STATE_MESSAGE: &str = "No events found matching your filters.";

/// Visual emphasis of a category badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
    Destructive,
}

impl BadgeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Destructive => "destructive",
        }
    }
}

impl EventCategory {
    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Seminar => "Seminar",
            EventCategory::Workshop => "Workshop",
            EventCategory::Conference => "Conference",
            EventCategory::Announcement => "Announcement",
        }
    }

    /// Label of the filter button for this category
    pub fn plural_label(self) -> &'static str {
        match self {
            EventCategory::Seminar => "Seminars",
            EventCategory::Workshop => "Workshops",
            EventCategory::Conference => "Conferences",
            EventCategory::Announcement => "Announcements",
        }
    }

    pub fn badge(self) -> BadgeVariant {
        match self {
            EventCategory::Seminar => BadgeVariant::Default,
            EventCategory::Workshop => BadgeVariant::Secondary,
            EventCategory::Conference => BadgeVariant::Outline,
            EventCategory::Announcement => BadgeVariant::Destructive,
        }
    }
}

impl CategoryFilter {
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.plural_label(),
        }
    }
}

impl TemporalFilter {
    pub fn label(self) -> &'static str {
        match self {
            TemporalFilter::Upcoming => "Upcoming",
            TemporalFilter::Past => "Past",
            TemporalFilter::All => "All",
        }
    }
}

/// "December 15, 2025"; the raw date string when it does not parse
pub fn long_date(event: &Event) -> String {
    event
        .day()
        .map(|day| day.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| event.date.clone())
}

/// Serializable summary of one category for listings and APIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub filter_label: &'static str,
    pub badge: BadgeVariant,
}

impl From<EventCategory> for CategoryInfo {
    fn from(category: EventCategory) -> Self {
        Self {
            value: category.as_str(),
            label: category.label(),
            filter_label: category.plural_label(),
            badge: category.badge(),
        }
    }
}

/// One entry per category, in declaration order
pub fn category_infos() -> Vec<CategoryInfo> {
    EventCategory::ALL.into_iter().map(CategoryInfo::from).collect()
}

/// Every category filter in button order, starting with `All`
pub fn category_filters() -> impl Iterator<Item = CategoryFilter> {
    std::iter::once(CategoryFilter::All).chain(EventCategory::ALL.into_iter().map(CategoryFilter::Only))
}
