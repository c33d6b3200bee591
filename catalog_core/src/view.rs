//! The events page's view state: the filter selection plus the one-shot
//! load of the collection.

use crate::catalog::EventCatalog;
use crate::display::EMPTY_STATE_MESSAGE;
use crate::event::Event;
use crate::filter::{CategoryFilter, FilterSelection, TemporalFilter};
use crate::source::{self, ContentSource};
use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(EventCatalog),
    Failed(String),
}

/// What the page should show for the current state and selection
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<'a> {
    Loading,
    Failed { message: String },
    Empty { message: &'static str },
    Events(Vec<&'a Event>),
}

#[derive(Debug, Clone)]
pub struct CatalogView {
    selection: FilterSelection,
    state: LoadState,
    generation: u64,
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            selection: FilterSelection::default(),
            state: LoadState::Loading,
            generation: 0,
        }
    }

    pub fn with_catalog(catalog: EventCatalog) -> Self {
        Self {
            selection: FilterSelection::default(),
            state: LoadState::Ready(catalog),
            generation: 0,
        }
    }

    pub fn selection(&self) -> FilterSelection {
        self.selection
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn catalog(&self) -> Option<&EventCatalog> {
        match &self.state {
            LoadState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.selection.select_category(category);
    }

    pub fn select_temporal(&mut self, temporal: TemporalFilter) {
        self.selection.select_temporal(temporal);
    }

    /// Mark the view as loading before a (re)fetch starts.
    ///
    /// Returns the ticket to hand back to [`CatalogView::finish_load`]; only
    /// the most recently issued ticket is applied.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.generation
    }

    pub async fn load(&mut self, source: &dyn ContentSource) {
        let ticket = self.begin_load();
        let result = source.fetch_events().await;
        self.finish_load(ticket, result);
    }

    /// Apply the outcome of a fetch. The selection is left as it was.
    ///
    /// Returns false, leaving the state untouched, when a newer load has
    /// started since `ticket` was issued.
    pub fn finish_load(&mut self, ticket: u64, result: source::Result<Vec<Event>>) -> bool {
        if ticket != self.generation {
            debug!(
                "Discarding load {} superseded by load {}",
                ticket, self.generation
            );
            return false;
        }
        self.state = match result {
            Ok(events) => {
                let catalog = EventCatalog::new(events);
                for issue in catalog.issues() {
                    warn!("Data issue: {}", issue);
                }
                info!("Loaded {} events", catalog.len());
                LoadState::Ready(catalog)
            }
            Err(e) => {
                error!("Failed to load events: {}", e);
                LoadState::Failed(format!("Unable to load events: {}", e))
            }
        };
        true
    }

    /// Recompute the listing for the current selection
    pub fn listing(&self, reference: NaiveDate) -> Listing<'_> {
        self.listing_for(&self.selection, reference)
    }

    /// Recompute the listing for a selection held elsewhere, e.g. per request
    pub fn listing_for(&self, selection: &FilterSelection, reference: NaiveDate) -> Listing<'_> {
        match &self.state {
            LoadState::Loading => Listing::Loading,
            LoadState::Failed(message) => Listing::Failed {
                message: message.clone(),
            },
            LoadState::Ready(catalog) => {
                let events = catalog.filter(selection, reference);
                if events.is_empty() {
                    Listing::Empty {
                        message: EMPTY_STATE_MESSAGE,
                    }
                } else {
                    Listing::Events(events)
                }
            }
        }
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}
