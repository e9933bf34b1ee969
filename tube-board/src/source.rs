//! Where the board gets its data from.

use crate::domain::{ArrivalList, DisruptionStatus};
use crate::tfl::{MockTflClient, TflClient, TflError};

/// Trait for providing line status and arrivals.
///
/// This abstraction allows the scheduler to be tested with scripted data.
/// Implementations hold no per-call state and are called on a fixed cadence.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Disruption status of the configured line.
    async fn fetch_disruption_status(&self) -> Result<DisruptionStatus, TflError>;

    /// Arrivals at the configured station, soonest first.
    async fn fetch_arrivals(&self) -> Result<ArrivalList, TflError>;

    /// Check the source is reachable. Called before the first tick and
    /// retried until it succeeds.
    async fn connect(&self) -> Result<(), TflError> {
        Ok(())
    }
}

impl DataSource for TflClient {
    async fn fetch_disruption_status(&self) -> Result<DisruptionStatus, TflError> {
        self.get_disruption_status().await
    }

    async fn fetch_arrivals(&self) -> Result<ArrivalList, TflError> {
        self.get_arrivals().await
    }

    /// A disruption query is the smallest request that proves the key works.
    async fn connect(&self) -> Result<(), TflError> {
        self.get_disruption_status().await.map(|_| ())
    }
}

impl DataSource for MockTflClient {
    async fn fetch_disruption_status(&self) -> Result<DisruptionStatus, TflError> {
        self.get_disruption_status().await
    }

    async fn fetch_arrivals(&self) -> Result<ArrivalList, TflError> {
        self.get_arrivals().await
    }

    async fn connect(&self) -> Result<(), TflError> {
        if self.data_dir().is_dir() {
            Ok(())
        } else {
            Err(TflError::Mock(format!(
                "mock data directory disappeared: {}",
                self.data_dir().display()
            )))
        }
    }
}

/// The data source picked at startup.
#[derive(Debug, Clone)]
pub enum Source {
    Live(TflClient),
    Mock(MockTflClient),
}

impl DataSource for Source {
    async fn fetch_disruption_status(&self) -> Result<DisruptionStatus, TflError> {
        match self {
            Source::Live(c) => c.fetch_disruption_status().await,
            Source::Mock(c) => c.fetch_disruption_status().await,
        }
    }

    async fn fetch_arrivals(&self) -> Result<ArrivalList, TflError> {
        match self {
            Source::Live(c) => c.fetch_arrivals().await,
            Source::Mock(c) => c.fetch_arrivals().await,
        }
    }

    async fn connect(&self) -> Result<(), TflError> {
        match self {
            Source::Live(c) => c.connect().await,
            Source::Mock(c) => c.connect().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfl::TflConfig;

    #[tokio::test]
    async fn mock_source_delegates() {
        let source = Source::Mock(MockTflClient::new("data/mock").unwrap());

        source.connect().await.unwrap();
        let arrivals = source.fetch_arrivals().await.unwrap();
        assert_eq!(arrivals[0].destination_name, "West Ruislip Underground Station");
        assert_eq!(arrivals[0].due_text(), "DUE");
    }

    #[tokio::test]
    async fn live_connect_fails_when_unreachable() {
        let config = TflConfig::new("SECRETKEY123", "central", "940GZZLUWOF")
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(5);
        let source = Source::Live(TflClient::new(config).unwrap());

        let err = source.connect().await.unwrap_err();
        assert!(matches!(err, TflError::Http(_)));
        assert!(!err.to_string().contains("SECRETKEY123"));
    }
}
