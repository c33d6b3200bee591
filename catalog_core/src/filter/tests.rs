use super::*;
use crate::event::EventId;
use proptest::prelude::*;
use std::collections::HashSet;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn scenario() -> Vec<Event> {
    vec![
        Event::new("A", "A", EventCategory::Seminar, "2025-12-15"),
        Event::new("B", "B", EventCategory::Workshop, "2025-12-20"),
        Event::new("C", "C", EventCategory::Conference, "2026-01-10"),
        Event::new("D", "D", EventCategory::Announcement, "2025-11-25"),
        Event::new("E", "E", EventCategory::Seminar, "2026-01-05"),
    ]
}

fn ids(events: &[&Event]) -> Vec<String> {
    events.iter().map(|e| e.id.to_string()).collect()
}

fn run(events: &[Event], category: &str, temporal: &str) -> Vec<String> {
    ids(&filter_by_names(events, category, temporal, day(2025, 12, 1)).unwrap())
}

#[test]
fn test_scenario_listings() {
    let events = scenario();
    assert_eq!(run(&events, "all", "upcoming"), ["A", "B", "E", "C"]);
    assert_eq!(run(&events, "seminar", "upcoming"), ["A", "E"]);
    assert_eq!(run(&events, "all", "past"), ["D"]);
    assert_eq!(run(&events, "announcement", "all"), ["D"]);
    assert!(run(&events, "conference", "past").is_empty());
}

#[test]
fn test_reference_day_counts_as_upcoming() {
    let events = vec![Event::new(1, "Today", EventCategory::Seminar, "2025-12-01")];
    let reference = day(2025, 12, 1);

    let upcoming = filter_events(&events, CategoryFilter::All, TemporalFilter::Upcoming, reference);
    let past = filter_events(&events, CategoryFilter::All, TemporalFilter::Past, reference);

    assert_eq!(upcoming.len(), 1);
    assert!(past.is_empty());
}

#[test]
fn test_empty_input() {
    for temporal in TemporalFilter::ALL {
        assert!(filter_events(&[], CategoryFilter::All, temporal, day(2025, 1, 1)).is_empty());
    }
}

#[test]
fn test_absent_category_yields_nothing() {
    let events: Vec<Event> = scenario()
        .into_iter()
        .filter(|e| e.category != EventCategory::Workshop)
        .collect();
    assert!(run(&events, "workshop", "all").is_empty());
}

#[test]
fn test_equal_days_keep_input_order() {
    let events = vec![
        Event::new(3, "third", EventCategory::Seminar, "2026-01-05"),
        Event::new(1, "first", EventCategory::Workshop, "2026-01-05"),
        Event::new(0, "earlier", EventCategory::Seminar, "2026-01-04"),
        Event::new(2, "second", EventCategory::Conference, "2026-01-05"),
    ];
    let result = filter_events(&events, CategoryFilter::All, TemporalFilter::All, day(2026, 1, 1));
    assert_eq!(ids(&result), ["0", "3", "1", "2"]);
}

#[test]
fn test_malformed_dates_only_in_all_and_last() {
    let events = vec![
        Event::new(1, "bad one", EventCategory::Seminar, "TBD"),
        Event::new(2, "late", EventCategory::Seminar, "2026-03-01"),
        Event::new(3, "bad two", EventCategory::Seminar, "2025-02-30"),
        Event::new(4, "early", EventCategory::Seminar, "2024-01-01"),
    ];
    let reference = day(2025, 6, 1);

    let all = filter_events(&events, CategoryFilter::All, TemporalFilter::All, reference);
    assert_eq!(ids(&all), ["4", "2", "1", "3"]);

    let upcoming = filter_events(&events, CategoryFilter::All, TemporalFilter::Upcoming, reference);
    assert_eq!(ids(&upcoming), ["2"]);

    let past = filter_events(&events, CategoryFilter::All, TemporalFilter::Past, reference);
    assert_eq!(ids(&past), ["4"]);
}

#[test]
fn test_invalid_filter_names_rejected() {
    let events = scenario();
    let reference = day(2025, 12, 1);

    assert_eq!(
        filter_by_names(&events, "seminars", "all", reference),
        Err(FilterError::InvalidCategory("seminars".into()))
    );
    assert_eq!(
        filter_by_names(&events, "", "all", reference),
        Err(FilterError::InvalidCategory(String::new()))
    );
    assert_eq!(
        filter_by_names(&events, "All", "all", reference),
        Err(FilterError::InvalidCategory("All".into()))
    );
    assert_eq!(
        filter_by_names(&events, "all", "future", reference),
        Err(FilterError::InvalidTemporal("future".into()))
    );
}

#[test]
fn test_input_not_mutated() {
    let events = scenario();
    let before = events.clone();
    let _ = filter_events(&events, CategoryFilter::All, TemporalFilter::All, day(2025, 12, 1));
    assert_eq!(events, before);
}

#[test]
fn test_selection_defaults_and_replacement() {
    let mut selection = FilterSelection::default();
    assert_eq!(selection.category, CategoryFilter::All);
    assert_eq!(selection.temporal, TemporalFilter::Upcoming);

    selection.select_category(EventCategory::Seminar.into());
    selection.select_category(EventCategory::Workshop.into());
    assert_eq!(selection.category, CategoryFilter::Only(EventCategory::Workshop));

    selection.select_temporal(TemporalFilter::Past);
    assert_eq!(selection.temporal, TemporalFilter::Past);
}

#[test]
fn test_filter_value_round_trip_through_strings() {
    for category in EventCategory::ALL {
        let filter = CategoryFilter::Only(category);
        assert_eq!(filter.to_string().parse::<CategoryFilter>(), Ok(filter));
    }
    assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
    for temporal in TemporalFilter::ALL {
        assert_eq!(temporal.to_string().parse::<TemporalFilter>(), Ok(temporal));
    }
}

fn arb_category() -> impl Strategy<Value = EventCategory> {
    prop::sample::select(EventCategory::ALL.to_vec())
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    // A narrow day range so that equal days are common.
    prop::collection::vec((arb_category(), 0u32..40), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (category, offset))| {
                let date = day(2025, 11, 1) + chrono::Duration::days(offset as i64);
                Event::new(i as i64, format!("event {i}"), category, date.format("%Y-%m-%d").to_string())
            })
            .collect()
    })
}

fn arb_reference() -> impl Strategy<Value = NaiveDate> {
    (0u32..40).prop_map(|offset| day(2025, 11, 1) + chrono::Duration::days(offset as i64))
}

// Generated ids are input positions.
fn position(event: &Event) -> i64 {
    match event.id {
        EventId::Numeric(n) => n,
        EventId::Text(_) => unreachable!("generated ids are numeric"),
    }
}

fn id_set(events: &[&Event]) -> HashSet<EventId> {
    events.iter().map(|e| e.id.clone()).collect()
}

proptest! {
    #[test]
    fn prop_filter_is_pure(events in arb_events(), reference in arb_reference()) {
        for temporal in TemporalFilter::ALL {
            let first = filter_events(&events, CategoryFilter::All, temporal, reference);
            let second = filter_events(&events, CategoryFilter::All, temporal, reference);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_categories_partition_all(events in arb_events(), reference in arb_reference()) {
        let everything = filter_events(&events, CategoryFilter::All, TemporalFilter::All, reference);
        let mut union = Vec::new();
        for category in EventCategory::ALL {
            union.extend(filter_events(&events, category.into(), TemporalFilter::All, reference));
        }
        prop_assert_eq!(union.len(), everything.len());
        prop_assert_eq!(id_set(&union), id_set(&everything));
    }

    #[test]
    fn prop_upcoming_and_past_partition_all(
        events in arb_events(),
        reference in arb_reference(),
        category in prop::option::of(arb_category()),
    ) {
        let category = category.map(CategoryFilter::Only).unwrap_or_default();
        let upcoming = id_set(&filter_events(&events, category, TemporalFilter::Upcoming, reference));
        let past = id_set(&filter_events(&events, category, TemporalFilter::Past, reference));
        let all = id_set(&filter_events(&events, category, TemporalFilter::All, reference));

        prop_assert!(upcoming.is_disjoint(&past));
        let union: HashSet<EventId> = upcoming.union(&past).cloned().collect();
        prop_assert_eq!(union, all);
    }

    #[test]
    fn prop_sorted_with_stable_ties(events in arb_events(), reference in arb_reference()) {
        let result = filter_events(&events, CategoryFilter::All, TemporalFilter::All, reference);
        for pair in result.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.day() <= b.day());
            if a.day() == b.day() {
                prop_assert!(position(a) < position(b));
            }
        }
    }
}
