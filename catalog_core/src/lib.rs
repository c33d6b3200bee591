pub mod catalog;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod event;
pub mod filter;
pub mod source;
pub mod view;

pub use catalog::{DataIssue, EventCatalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use event::{Event, EventCategory, EventId};
pub use filter::{
    filter_by_names, filter_events, CategoryFilter, FilterError, FilterSelection, TemporalFilter,
};
pub use source::{BuiltinSource, ContentSource, FileSource, RemoteSource, SourceError};
pub use view::{CatalogView, Listing, LoadState};
