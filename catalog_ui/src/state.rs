use catalog_core::{CatalogView, Clock, ContentSource, LoadState};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Shared application state
pub struct AppState {
    /// The loaded catalog and its lifecycle
    pub view: RwLock<CatalogView>,

    /// Where events are (re)loaded from
    pub source: Arc<dyn ContentSource>,

    /// Supplies the reference day for every request
    pub clock: Arc<dyn Clock>,

    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// State in the loading phase; call [`AppState::reload`] to populate it
    pub fn new(source: Arc<dyn ContentSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            view: RwLock::new(CatalogView::new()),
            source,
            clock,
            started_at: Utc::now(),
        }
    }

    /// Run the one-shot fetch and apply its outcome.
    ///
    /// The view lock is not held while the fetch is in flight. When reloads
    /// overlap, the one started last wins and the others report its state.
    pub async fn reload(&self) -> LoadState {
        self.reload_from(self.source.as_ref()).await
    }

    async fn reload_from(&self, source: &dyn ContentSource) -> LoadState {
        info!("Loading events from {}", source.describe());
        let ticket = self.view.write().await.begin_load();
        let result = source.fetch_events().await;

        let mut view = self.view.write().await;
        view.finish_load(ticket, result);
        view.state().clone()
    }
}
