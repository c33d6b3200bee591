mod builtin;
mod file;
mod remote;

pub use builtin::BuiltinSource;
pub use file::FileSource;
pub use remote::{RemoteSource, DEFAULT_ORDER_BY, DEFAULT_TABLE, DEFAULT_TIMEOUT};

use crate::event::Event;
use async_trait::async_trait;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SourceError>;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML decode error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported data file format: {0}")]
    UnsupportedFormat(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Record store returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Anything that can hand over the full event collection in one fetch
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Where the events come from, for logs and health output
    fn describe(&self) -> String;

    async fn fetch_events(&self) -> Result<Vec<Event>>;
}
