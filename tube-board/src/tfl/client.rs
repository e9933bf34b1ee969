//! TfL Unified API HTTP client.
//!
//! Queries the disruption status of one line and the arrival predictions at
//! one stop. Authentication is an `app_key` query parameter.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{ArrivalList, DisruptionStatus};

use super::convert::{convert_arrivals, convert_disruptions, parse_body};
use super::error::TflError;
use super::types::{ArrivalPrediction, Disruption};

/// Default base URL for the TfL Unified API.
pub const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Default request timeout. Without one a hung request would freeze the board.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Application key for authentication
    pub app_key: String,
    /// Line id, e.g. `"central"`
    pub line: String,
    /// StopPoint id, e.g. `"940GZZLUWOF"`
    pub station_id: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a new config for one line and station.
    pub fn new(
        app_key: impl Into<String>,
        line: impl Into<String>,
        station_id: impl Into<String>,
    ) -> Self {
        Self {
            app_key: app_key.into(),
            line: line.into(),
            station_id: station_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// TfL API client for a single line and station.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    config: TflConfig,
}

impl TflClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    fn disruption_url(&self) -> String {
        format!(
            "{}/Line/{}/Disruption",
            self.config.base_url.trim_end_matches('/'),
            self.config.line
        )
    }

    fn arrivals_url(&self) -> String {
        format!(
            "{}/StopPoint/{}/Arrivals",
            self.config.base_url.trim_end_matches('/'),
            self.config.station_id
        )
    }

    /// Current disruption status of the configured line.
    pub async fn get_disruption_status(&self) -> Result<DisruptionStatus, TflError> {
        let disruptions: Vec<Disruption> = self.get_json(&self.disruption_url()).await?;
        Ok(convert_disruptions(&disruptions))
    }

    /// Arrival predictions at the configured station, soonest first.
    pub async fn get_arrivals(&self) -> Result<ArrivalList, TflError> {
        let predictions: Vec<ArrivalPrediction> = self.get_json(&self.arrivals_url()).await?;
        Ok(convert_arrivals(predictions))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TflError> {
        debug!(url, "TfL request");

        let response = self
            .http
            .get(url)
            .query(&[("app_key", self.config.app_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        let body = response.text().await?;
        parse_body(&body)
    }
}

/// Map a non-success response to an error. `body` is kept only for
/// statuses without a dedicated variant.
fn status_error(status: StatusCode, body: String) -> TflError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TflError::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => TflError::RateLimited,
        _ => TflError::Api {
            status: status.as_u16(),
            message: body,
        },
    }
}
