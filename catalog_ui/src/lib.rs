//! Catalog UI library module exports
//! This file enables the crate to be used as a library in tests

pub mod events;
pub mod page;
pub mod state;
pub mod utils;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::events::{get_event, health_handler, list_categories, list_events, reload_events};
use crate::page::index_handler;
use crate::state::AppState;

/// Build the application router
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/events", get(list_events))
        .route("/api/events/:id", get(get_event))
        .route("/api/categories", get(list_categories))
        .route("/api/reload", post(reload_events))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
