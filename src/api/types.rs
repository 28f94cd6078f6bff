//! Request and response types for the health-records API.
//!
//! One struct per endpoint payload. History endpoints return pages ordered
//! most-recent-first; [`crate::normalize`] reverses them for plotting.

use serde::{Deserialize, Serialize};

/// Credentials for `POST /auth/login/password`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session issued by a successful login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub session_key: String,
    #[serde(default)]
    pub expires: Option<String>,
}

/// Filter body for `POST /participant/lookup`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParticipantLookupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl ParticipantLookupRequest {
    /// Split a free-text query into first/last name filters.
    /// A single word searches by first name only.
    pub fn from_query(query: &str) -> Self {
        let mut words = query.split_whitespace();
        Self {
            first_name: words.next().map(str::to_owned),
            last_name: words.next().map(str::to_owned),
        }
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    pub total_pages: u32,
    pub total: u32,
    pub data: Vec<T>,
}

/// A participant row from the lookup endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParticipantSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number_one: Option<String>,
    #[serde(default)]
    pub phone_number_two: Option<String>,
    pub program: String,
    #[serde(default)]
    pub location: Option<i64>,
}

impl ParticipantSummary {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Summary from `GET /participant/get/{id}/health_overview`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthOverview {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub last_visited: Option<String>,
}

/// One blood-glucose history record
#[derive(Debug, Clone, Deserialize)]
pub struct GlucoseRecord {
    pub date_of_visit: String,
    #[serde(default)]
    pub result: Option<f64>,
}

/// One blood-pressure history record
#[derive(Debug, Clone, Deserialize)]
pub struct BloodPressureRecord {
    pub date_of_visit: String,
    #[serde(default)]
    pub readings: Option<BpReadings>,
}

/// Readings taken at a visit, keyed by posture
#[derive(Debug, Clone, Deserialize)]
pub struct BpReadings {
    #[serde(default)]
    pub sit: Option<BpReading>,
    #[serde(default)]
    pub stand: Option<BpReading>,
}

/// A single systolic/diastolic pair
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BpReading {
    pub systolic: f64,
    pub diastolic: f64,
}

/// One weight history record
#[derive(Debug, Clone, Deserialize)]
pub struct WeightRecord {
    pub date_of_visit: String,
    #[serde(default)]
    pub weight: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_request_splits_query() {
        let request = ParticipantLookupRequest::from_query("Jane Doe");
        assert_eq!(request.first_name.as_deref(), Some("Jane"));
        assert_eq!(request.last_name.as_deref(), Some("Doe"));

        let single = ParticipantLookupRequest::from_query("Jane");
        assert_eq!(single.first_name.as_deref(), Some("Jane"));
        assert_eq!(single.last_name, None);
    }

    #[test]
    fn test_lookup_request_skips_empty_filters() {
        let body = serde_json::to_string(&ParticipantLookupRequest::from_query("Jane")).unwrap();
        assert_eq!(body, r#"{"first_name":"Jane"}"#);
    }

    #[test]
    fn test_paginated_response_tolerates_unknown_fields() {
        let json = r#"{
            "total_pages": 1,
            "total": 2,
            "extra": "ignored",
            "data": [
                {"id": 7, "first_name": "Jane", "last_name": "Doe", "program": "RHWP", "location": 1},
                {"id": 8, "first_name": "John", "last_name": "Roe", "program": "MHWP"}
            ]
        }"#;
        let page: PaginatedResponse<ParticipantSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.data[0].display_name(), "Jane Doe");
        assert_eq!(page.data[1].location, None);
    }

    #[test]
    fn test_bp_record_tolerates_missing_readings() {
        let json = r#"{"data": [
            {"date_of_visit": "2024-03-01", "readings": {"sit": {"systolic": 120, "diastolic": 80}}},
            {"date_of_visit": "2024-02-01"}
        ], "total": 2, "total_pages": 1}"#;
        let page: PaginatedResponse<BloodPressureRecord> = serde_json::from_str(json).unwrap();
        let sit = page.data[0].readings.as_ref().unwrap().sit.unwrap();
        assert_eq!(sit.systolic, 120.0);
        assert!(page.data[1].readings.is_none());
    }
}
