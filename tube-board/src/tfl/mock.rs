//! Mock TfL client for running the board without API access.
//!
//! Serves `disruption.json` and `arrivals.json` from a directory. Both files
//! hold the raw API payloads. They are re-read on every fetch, so editing
//! them changes what the board shows on the next fetch.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::domain::{ArrivalList, DisruptionStatus};

use super::convert::{convert_arrivals, convert_disruptions, parse_body};
use super::error::TflError;
use super::types::{ArrivalPrediction, Disruption};

const DISRUPTION_FILE: &str = "disruption.json";
const ARRIVALS_FILE: &str = "arrivals.json";

/// Mock TfL client that serves data from JSON files.
#[derive(Debug, Clone)]
pub struct MockTflClient {
    data_dir: PathBuf,
}

impl MockTflClient {
    /// Create a mock client reading from `data_dir`.
    ///
    /// Fails if the directory does not exist.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, TflError> {
        let data_dir = data_dir.as_ref();
        if !data_dir.is_dir() {
            return Err(TflError::Mock(format!(
                "mock data directory not found: {}",
                data_dir.display()
            )));
        }
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub async fn get_disruption_status(&self) -> Result<DisruptionStatus, TflError> {
        let disruptions: Vec<Disruption> = self.load(DISRUPTION_FILE)?;
        Ok(convert_disruptions(&disruptions))
    }

    pub async fn get_arrivals(&self) -> Result<ArrivalList, TflError> {
        let predictions: Vec<ArrivalPrediction> = self.load(ARRIVALS_FILE)?;
        Ok(convert_arrivals(predictions))
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<T, TflError> {
        let path = self.data_dir.join(file);
        let json = std::fs::read_to_string(&path)
            .map_err(|e| TflError::Mock(format!("failed to read {}: {e}", path.display())))?;
        parse_body(&json)
    }
}
