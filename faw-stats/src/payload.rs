//! Wire types for the backend endpoints.
//!
//! Every field the backend may omit decodes to a default instead of
//! failing the whole body: a missing array becomes empty, a missing
//! count becomes zero. Only a record without a county name is dropped,
//! and that happens during normalization, not during decoding.

use serde::{Deserialize, Serialize};

/// One fraud-method row: how many recorded cases matched a method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudStat {
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(default)]
    pub count: u32,
}

/// One county record in the raw `/api/fraud-stats` payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountyRecord {
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub top5: Vec<FraudStat>,
}

/// Raw `GET /api/fraud-stats` response body.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FraudStatsPayload {
    #[serde(default)]
    pub top5_types: Vec<FraudStat>,
    #[serde(default)]
    pub county_counts: Vec<CountyRecord>,
}

/// `POST /api/ask` request body.
///
/// Coordinates are omitted from the serialized body when geolocation was
/// denied or failed, rather than being sent as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl AskRequest {
    /// A question with no location attached.
    pub fn without_location(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            latitude: None,
            longitude: None,
        }
    }

    /// A question with the user's coordinates attached.
    pub fn with_location(question: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            question: question.into(),
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }
}

/// `POST /api/ask` response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// `POST /location` telemetry body. The response is ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationPing {
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_arrays_decode_to_empty() {
        let payload: FraudStatsPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.top5_types.is_empty());
        assert!(payload.county_counts.is_empty());
    }

    #[test]
    fn test_county_record_defaults() {
        let record: CountyRecord = serde_json::from_str(r#"{"county": "臺北市"}"#).unwrap();
        assert_eq!(record.county.as_deref(), Some("臺北市"));
        assert_eq!(record.count, 0);
        assert!(record.top5.is_empty());
    }

    #[test]
    fn test_record_without_county_still_decodes() {
        let record: CountyRecord = serde_json::from_str(r#"{"count": 3}"#).unwrap();
        assert_eq!(record.county, None);
        assert_eq!(record.count, 3);
    }

    #[test]
    fn test_fraud_stat_type_field_rename() {
        let stat: FraudStat = serde_json::from_str(r#"{"type": "假投資", "count": 12}"#).unwrap();
        assert_eq!(stat.type_name, "假投資");
        assert_eq!(stat.count, 12);
    }

    #[test]
    fn test_ask_request_omits_absent_coordinates() {
        let body = serde_json::to_value(AskRequest::without_location("如何防詐騙？")).unwrap();
        assert_eq!(body["question"], "如何防詐騙？");
        assert!(body.get("latitude").is_none());
        assert!(body.get("longitude").is_none());
    }

    #[test]
    fn test_ask_request_with_coordinates() {
        let body =
            serde_json::to_value(AskRequest::with_location("q", 25.033, 121.565)).unwrap();
        assert_eq!(body["latitude"], 25.033);
        assert_eq!(body["longitude"], 121.565);
    }
}
