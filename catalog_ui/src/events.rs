use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use catalog_core::{
    display::{category_infos, CategoryInfo},
    CategoryFilter, Event, FilterError, FilterSelection, Listing,
    LoadState, TemporalFilter,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::state::AppState;
use crate::utils::{ApiResponse, HealthStatus};

type ApiResult<T> = (StatusCode, Json<ApiResponse<T>>);

/// Filter parameters shared by the page and the event list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    /// all, seminar, workshop, conference or announcement
    pub category: Option<String>,

    /// upcoming, past or all
    pub when: Option<String>,
}

impl EventQuery {
    /// Missing parameters fall back to the default selection
    pub fn selection(&self) -> Result<FilterSelection, FilterError> {
        let mut selection = FilterSelection::default();
        if let Some(category) = &self.category {
            selection.select_category(category.parse::<CategoryFilter>()?);
        }
        if let Some(when) = &self.when {
            selection.select_temporal(when.parse::<TemporalFilter>()?);
        }
        Ok(selection)
    }
}

fn ok<T>(data: T) -> ApiResult<T> {
    (StatusCode::OK, Json(ApiResponse::success(data)))
}

fn fail<T>(status: StatusCode, msg: impl Into<String>) -> ApiResult<T> {
    (status, Json(ApiResponse::error(msg)))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EventQuery>,
) -> ApiResult<Vec<Event>> {
    let selection = match query.selection() {
        Ok(selection) => selection,
        Err(e) => return fail(StatusCode::BAD_REQUEST, e.to_string()),
    };
    let today = state.clock.today();
    debug!(category = %selection.category, temporal = %selection.temporal, %today, "Listing events");

    let view = state.view.read().await;
    match view.listing_for(&selection, today) {
        Listing::Loading => fail(StatusCode::SERVICE_UNAVAILABLE, "Events are still loading"),
        Listing::Failed { message } => fail(StatusCode::SERVICE_UNAVAILABLE, message),
        Listing::Empty { .. } => ok(Vec::new()),
        Listing::Events(events) => ok(events.into_iter().cloned().collect()),
    }
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Event> {
    let view = state.view.read().await;
    let Some(catalog) = view.catalog() else {
        return fail(StatusCode::SERVICE_UNAVAILABLE, "Events are not available");
    };
    match catalog.lookup(&id) {
        Ok(event) => ok(event.clone()),
        Err(e) => fail(StatusCode::NOT_FOUND, e.to_string()),
    }
}

pub async fn list_categories() -> ApiResult<Vec<CategoryInfo>> {
    ok(category_infos())
}

pub async fn reload_events(State(state): State<Arc<AppState>>) -> ApiResult<usize> {
    info!("Reload requested");
    match state.reload().await {
        LoadState::Ready(catalog) => ok(catalog.len()),
        LoadState::Failed(message) => fail(StatusCode::BAD_GATEWAY, message),
        LoadState::Loading => fail(StatusCode::SERVICE_UNAVAILABLE, "Events are still loading"),
    }
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    let view = state.view.read().await;
    let (catalog, events) = match view.state() {
        LoadState::Loading => ("loading", 0),
        LoadState::Ready(catalog) => ("ready", catalog.len()),
        LoadState::Failed(_) => ("failed", 0),
    };
    let uptime = (chrono::Utc::now() - state.started_at).num_seconds().max(0) as u64;

    Json(HealthStatus {
        status: if catalog == "failed" { "degraded" } else { "ok" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime,
        catalog: catalog.to_string(),
        events,
        source: state.source.describe(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::EventCategory;

    #[test]
    fn test_query_defaults() {
        let selection = EventQuery::default().selection().unwrap();
        assert_eq!(selection, FilterSelection::default());
    }

    #[test]
    fn test_query_parsing() {
        let query = EventQuery {
            category: Some("workshop".into()),
            when: Some("past".into()),
        };
        assert_eq!(
            query.selection().unwrap(),
            FilterSelection::new(
                CategoryFilter::Only(EventCategory::Workshop),
                TemporalFilter::Past
            )
        );

        let bad = EventQuery {
            category: Some("workshops".into()),
            when: None,
        };
        assert_eq!(
            bad.selection(),
            Err(FilterError::InvalidCategory("workshops".into()))
        );
    }
}
