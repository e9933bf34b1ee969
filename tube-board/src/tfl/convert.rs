//! Conversion from TfL DTOs to domain types.

use tracing::debug;

use crate::domain::{Arrival, ArrivalList, DisruptionStatus};

use super::error::TflError;
use super::types::{ArrivalPrediction, Disruption};

/// Classify a disruption response.
///
/// Only the first disruption is considered; an empty response is good service.
pub fn convert_disruptions(disruptions: &[Disruption]) -> DisruptionStatus {
    match disruptions.first() {
        None => DisruptionStatus::good_service(),
        Some(d) => DisruptionStatus::from_closure_text(d.closure_text.as_deref().unwrap_or("")),
    }
}

/// Convert arrival predictions into a sorted [`ArrivalList`].
///
/// Predictions for trains already at the platform can come back slightly
/// negative; those are clamped to zero.
pub fn convert_arrivals(predictions: Vec<ArrivalPrediction>) -> ArrivalList {
    predictions
        .into_iter()
        .map(|p| {
            if p.time_to_station < 0 {
                debug!(
                    destination = %p.destination_name,
                    seconds = p.time_to_station,
                    "Clamping negative time to station"
                );
            }
            let seconds = p.time_to_station.clamp(0, i64::from(u32::MAX)) as u32;
            Arrival::new(p.destination_name, seconds)
        })
        .collect()
}

/// Parse a response body, keeping a truncated copy of it on failure.
pub(crate) fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, TflError> {
    serde_json::from_str(body).map_err(|e| TflError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}
