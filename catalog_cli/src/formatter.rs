//! Formatting utilities for the CLI output.

use catalog_core::display::{self, BadgeVariant};
use catalog_core::{DataIssue, Event, EventCategory};
use colored::Colorize;

/// Format a category badge with the color of its variant
pub fn format_category(category: EventCategory) -> String {
    let label = format!("{:<12}", category.label());
    match category.badge() {
        BadgeVariant::Default => label.blue().to_string(),
        BadgeVariant::Secondary => label.cyan().to_string(),
        BadgeVariant::Outline => label.normal().to_string(),
        BadgeVariant::Destructive => label.red().to_string(),
    }
}

/// One listing entry: a headline plus indented time, place and speaker
pub fn format_event_entry(event: &Event) -> String {
    let mut entry = format!(
        "{:<18} {} {}",
        display::long_date(event),
        format_category(event.category),
        event.title.bold()
    );
    if !event.time.is_empty() {
        entry.push_str(&format!("\n{:>20}{}", "", event.time));
    }
    if !event.location.is_empty() {
        entry.push_str(&format!("\n{:>20}{}", "", event.location));
    }
    if let Some(speaker) = &event.speaker {
        entry.push_str(&format!("\n{:>20}Speaker: {}", "", speaker));
    }
    entry
}

pub fn format_listing(events: &[&Event]) -> String {
    events
        .iter()
        .map(|event| format_event_entry(event))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Full details of one event
pub fn format_event_details(event: &Event) -> String {
    let mut lines = vec![
        format!("{}", event.title.bold()),
        format!("ID:          {}", event.id),
        format!("Category:    {}", format_category(event.category).trim_end()),
        format!("Date:        {}", display::long_date(event)),
    ];
    if !event.time.is_empty() {
        lines.push(format!("Time:        {}", event.time));
    }
    if !event.location.is_empty() {
        lines.push(format!("Location:    {}", event.location));
    }
    if let Some(speaker) = &event.speaker {
        lines.push(format!("Speaker:     {}", speaker));
    }
    if !event.description.is_empty() {
        lines.push(String::new());
        lines.push(event.description.clone());
    }
    lines.join("\n")
}

pub fn format_issue(issue: &DataIssue) -> String {
    format!("{} {}", "warning:".yellow(), issue)
}
