//! Server-rendered events page.
//!
//! Every filter button is a plain link carrying the full selection in the
//! query string, so the page works without scripts.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use catalog_core::{
    display::{category_filters, long_date},
    Event, FilterSelection, Listing, TemporalFilter,
};
use std::fmt::Write;
use std::sync::Arc;
use tracing::debug;

use crate::events::EventQuery;
use crate::state::AppState;
use crate::utils::escape_html;

const STYLE: &str = r#"
        body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 960px; padding: 24px; }
        .filters { display: flex; flex-wrap: wrap; gap: 8px; margin: 12px 0; }
        .filters a { border: 1px solid #ccc; border-radius: 6px; padding: 6px 12px; text-decoration: none; color: #222; }
        .filters a.active { background: #1f2937; border-color: #1f2937; color: #fff; }
        .cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px; }
        .card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; }
        .badge { border-radius: 9999px; font-size: 12px; padding: 2px 8px; }
        .badge-default { background: #1f2937; color: #fff; }
        .badge-secondary { background: #e5e7eb; color: #111; }
        .badge-outline { border: 1px solid #9ca3af; color: #111; }
        .badge-destructive { background: #dc2626; color: #fff; }
        .meta { color: #555; font-size: 14px; margin: 4px 0; }
        .notice { color: #555; padding: 48px 0; text-align: center; }
        .notice.error { color: #b91c1c; }
"#;

pub async fn index_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EventQuery>,
) -> (StatusCode, Html<String>) {
    let selection = match query.selection() {
        Ok(selection) => selection,
        Err(e) => {
            let body = format!(r#"<p class="notice error">{}</p>"#, escape_html(&e.to_string()));
            return (
                StatusCode::BAD_REQUEST,
                Html(render_page(&FilterSelection::default(), &body)),
            );
        }
    };

    let today = state.clock.today();
    debug!(category = %selection.category, temporal = %selection.temporal, %today, "Rendering events page");

    let view = state.view.read().await;
    let body = match view.listing_for(&selection, today) {
        Listing::Loading => r#"<p class="notice">Loading events...</p>"#.to_string(),
        Listing::Failed { message } => {
            format!(r#"<p class="notice error">{}</p>"#, escape_html(&message))
        }
        Listing::Empty { message } => format!(r#"<p class="notice">{}</p>"#, message),
        Listing::Events(events) => render_cards(&events),
    };

    (StatusCode::OK, Html(render_page(&selection, &body)))
}

fn filter_link(selection: &FilterSelection, label: &str, active: bool) -> String {
    format!(
        r#"<a href="/?category={}&amp;when={}"{}>{}</a>"#,
        selection.category,
        selection.temporal,
        if active { r#" class="active""# } else { "" },
        label
    )
}

fn render_filters(selection: &FilterSelection) -> String {
    let mut html = String::from(r#"<nav class="filters" aria-label="Category">"#);
    for category in category_filters() {
        let target = FilterSelection::new(category, selection.temporal);
        html.push_str(&filter_link(
            &target,
            category.label(),
            category == selection.category,
        ));
    }
    html.push_str(r#"</nav><nav class="filters" aria-label="Time">"#);
    for temporal in TemporalFilter::ALL {
        let target = FilterSelection::new(selection.category, temporal);
        html.push_str(&filter_link(
            &target,
            temporal.label(),
            temporal == selection.temporal,
        ));
    }
    html.push_str("</nav>");
    html
}

fn render_card(html: &mut String, event: &Event) {
    let _ = write!(
        html,
        r#"<article class="card" id="event-{}"><span class="badge badge-{}">{}</span><h2>{}</h2><p class="meta">{}"#,
        escape_html(&event.id.to_string()),
        event.category.badge().as_str(),
        event.category.label(),
        escape_html(&event.title),
        escape_html(&long_date(event)),
    );
    if !event.time.is_empty() {
        let _ = write!(html, " &middot; {}", escape_html(&event.time));
    }
    html.push_str("</p>");
    if !event.location.is_empty() {
        let _ = write!(html, r#"<p class="meta">{}</p>"#, escape_html(&event.location));
    }
    if let Some(speaker) = &event.speaker {
        let _ = write!(html, r#"<p class="meta">Speaker: {}</p>"#, escape_html(speaker));
    }
    if !event.description.is_empty() {
        let _ = write!(html, "<p>{}</p>", escape_html(&event.description));
    }
    html.push_str("</article>");
}

fn render_cards(events: &[&Event]) -> String {
    let mut html = String::from(r#"<section class="cards">"#);
    for event in events {
        render_card(&mut html, event);
    }
    html.push_str("</section>");
    html
}

fn render_page(selection: &FilterSelection, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Events &amp; News</title>
    <style>{}</style>
</head>
<body>
    <h1>Events &amp; News</h1>
    <p>Seminars, workshops, conferences and announcements from the department.</p>
    {}
    {}
</body>
</html>"#,
        STYLE,
        render_filters(selection),
        body
    )
}
