//! Catalog configuration, read from a TOML file.

use crate::error::{CatalogError, Result};
use crate::source::{BuiltinSource, ContentSource, FileSource, RemoteSource};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the event collection comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    #[default]
    Builtin,
    File {
        path: PathBuf,
    },
    Remote {
        base_url: String,
        #[serde(default = "default_table")]
        table: String,
        #[serde(default = "default_order_by")]
        order_by: String,
        /// Name of the environment variable holding the API key
        #[serde(default)]
        api_key_env: Option<String>,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_table() -> String {
    crate::source::DEFAULT_TABLE.to_string()
}

fn default_order_by() -> String {
    crate::source::DEFAULT_ORDER_BY.to_string()
}

fn default_timeout_secs() -> u64 {
    crate::source::DEFAULT_TIMEOUT.as_secs()
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl CatalogConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: CatalogConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;
        self.server.socket_addr()?;
        Ok(())
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| CatalogError::Config(format!("Invalid bind address {:?}: {}", self.bind, e)))
    }
}

impl SourceConfig {
    pub fn validate(&self) -> Result<()> {
        match self {
            SourceConfig::Builtin => Ok(()),
            SourceConfig::File { path } => {
                if path.as_os_str().is_empty() {
                    return Err(CatalogError::Config("File source path cannot be empty".into()));
                }
                Ok(())
            }
            SourceConfig::Remote {
                base_url,
                table,
                timeout_secs,
                ..
            } => {
                if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                    return Err(CatalogError::Config(format!(
                        "Remote base_url must be an http(s) URL, got {:?}",
                        base_url
                    )));
                }
                if table.is_empty() {
                    return Err(CatalogError::Config("Remote table cannot be empty".into()));
                }
                if *timeout_secs == 0 {
                    return Err(CatalogError::Config("Remote timeout_secs must be positive".into()));
                }
                Ok(())
            }
        }
    }

    /// Build the configured source. A configured but unset API key variable
    /// means the request goes out without a key.
    pub fn build(&self) -> Box<dyn ContentSource> {
        match self {
            SourceConfig::Builtin => Box::new(BuiltinSource),
            SourceConfig::File { path } => Box::new(FileSource::new(path)),
            SourceConfig::Remote {
                base_url,
                table,
                order_by,
                api_key_env,
                timeout_secs,
            } => {
                let mut source = RemoteSource::new(base_url.clone())
                    .with_table(table.clone())
                    .with_order_by(order_by.clone())
                    .with_timeout(Duration::from_secs(*timeout_secs));
                if let Some(var) = api_key_env {
                    match std::env::var(var) {
                        Ok(key) if !key.is_empty() => source = source.with_api_key(key),
                        _ => debug!("API key variable {} is not set", var),
                    }
                }
                Box::new(source)
            }
        }
    }
}
