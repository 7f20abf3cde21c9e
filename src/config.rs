use crate::query::{DEFAULT_ENDPOINT, DEFAULT_QUERY};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_REGION: &str = "Istria";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "destionations_fetch/1.0 (contact: you@example.com)";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("impossible to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    InvalidToml(#[from] toml::de::Error),
    #[error("invalid endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
}

/// Everything a run depends on. Every field can be set in a toml file, the
/// missing ones keep the Wikidata / Istria defaults.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sparql endpoint
    pub endpoint: String,
    /// Sparql query, its bindings need an `itemLabel` and a `coord` variable
    pub query: String,
    /// Region label stored with every destination of the run
    pub region: String,
    /// Total request timeout, in seconds
    #[serde(rename = "timeout")]
    pub timeout_secs: u64,
    /// User-Agent header, Wikidata throttles anonymous clients
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            query: DEFAULT_QUERY.to_owned(),
            region: DEFAULT_REGION.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
