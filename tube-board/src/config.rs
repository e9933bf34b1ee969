//! Startup configuration, read once from the environment.

use std::path::PathBuf;

use crate::source::Source;
use crate::tfl::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MockTflClient, TflClient, TflConfig, TflError,
};

/// Header shown above the arrivals when `TFL_BOARD_TITLE` is unset.
pub const DEFAULT_TITLE: &str = "Departures";

/// Error loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} is not set")]
    Missing(&'static str),

    /// A variable has an unusable value
    #[error("{key} is invalid: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Where arrivals come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// The TfL API.
    Live {
        app_key: String,
        line: String,
        station_id: String,
        base_url: String,
        timeout_secs: u64,
    },
    /// JSON files in a directory.
    Mock { data_dir: PathBuf },
}

impl SourceConfig {
    /// Build the client this configuration describes.
    pub fn build(&self) -> Result<Source, TflError> {
        match self {
            SourceConfig::Live {
                app_key,
                line,
                station_id,
                base_url,
                timeout_secs,
            } => {
                let config = TflConfig::new(app_key, line, station_id)
                    .with_base_url(base_url)
                    .with_timeout(*timeout_secs);
                Ok(Source::Live(TflClient::new(config)?))
            }
            SourceConfig::Mock { data_dir } => Ok(Source::Mock(MockTflClient::new(data_dir)?)),
        }
    }
}

/// Everything the board needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub source: SourceConfig,
    /// Header text for the arrivals view.
    pub title: String,
}

impl BoardConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let title = get("TFL_BOARD_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let source = match get("TFL_MOCK_DIR") {
            Some(dir) => SourceConfig::Mock {
                data_dir: PathBuf::from(dir),
            },
            None => {
                let timeout_secs = match get("TFL_TIMEOUT_SECS") {
                    None => DEFAULT_TIMEOUT_SECS,
                    Some(raw) => parse_timeout(&raw)?,
                };
                SourceConfig::Live {
                    app_key: require("TFL_APP_KEY")?,
                    line: require("TFL_LINE")?,
                    station_id: require("TFL_STATION_ID")?,
                    base_url: get("TFL_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                    timeout_secs,
                }
            }
        };

        Ok(Self { source, title })
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    let invalid = |message: String| ConfigError::Invalid {
        key: "TFL_TIMEOUT_SECS",
        message,
    };
    match raw.parse::<u64>() {
        Ok(0) => Err(invalid("must be at least 1".to_string())),
        Ok(secs) => Ok(secs),
        Err(e) => Err(invalid(e.to_string())),
    }
}
