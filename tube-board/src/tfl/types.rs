//! TfL Unified API response DTOs.
//!
//! Only the fields the board reads are modelled; serde ignores the rest.
//! Fields the board cannot work without are non-optional, so a payload
//! missing them fails to parse instead of producing a half-filled row.

use serde::Deserialize;

/// One entry from `GET /Line/{id}/Disruption`.
///
/// An empty response array means the line has good service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disruption {
    /// Closure code, e.g. `"minorDelays"`. Absent on some disruption kinds.
    #[serde(default)]
    pub closure_text: Option<String>,
}

/// One entry from `GET /StopPoint/{id}/Arrivals`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalPrediction {
    /// Destination station name, e.g. `"Epping Underground Station"`.
    pub destination_name: String,

    /// Predicted seconds until the train reaches this stop.
    pub time_to_station: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_arrivals_ignores_extra_fields() {
        let json = r#"[{
            "$type": "Tfl.Api.Presentation.Entities.Prediction, Tfl.Api.Presentation.Entities",
            "id": "-1234",
            "lineId": "central",
            "platformName": "Westbound - Platform 1",
            "destinationName": "Ealing Broadway Underground Station",
            "timeToStation": 185
        }]"#;

        let parsed: Vec<ArrivalPrediction> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].destination_name, "Ealing Broadway Underground Station");
        assert_eq!(parsed[0].time_to_station, 185);
    }

    #[test]
    fn arrival_without_time_is_rejected() {
        let json = r#"[{"destinationName": "Epping"}]"#;
        assert!(serde_json::from_str::<Vec<ArrivalPrediction>>(json).is_err());
    }

    #[test]
    fn disruption_closure_text_optional() {
        let json = r#"[{"description": "Planned works"}]"#;
        let parsed: Vec<Disruption> = serde_json::from_str(json).unwrap();
        assert!(parsed[0].closure_text.is_none());
    }
}
