use crate::dto::location_dto::LocationResponse;
use crate::models::TripStatus;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// A trip endpoint: either a reference to an existing location (`id` set)
// or an inline location that gets persisted together with the trip.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInput {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
}

// Request to create or fully replace a trip
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTripRequest {
    pub name: String,
    pub start_location: LocationInput,
    pub end_location: LocationInput,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Decimal,
    pub notes: Option<String>,
    pub status: Option<TripStatus>,
}

// Request for PUT /:id/status; only the status field is applied
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripStatusRequest {
    pub status: TripStatus,
}

// Trip response with both endpoints embedded
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub id: Uuid,
    pub name: String,
    pub start_location: LocationResponse,
    pub end_location: LocationResponse,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Decimal,
    pub notes: Option<String>,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_trip_request_wire_shape() {
        let body = r#"{
            "name": "Paris Trip",
            "startLocation": {"name": "Berlin", "country": "Germany"},
            "endLocation": {"id": "6f9619ff-8b86-4d01-b42d-00cf4fc964ff"},
            "startDate": "2025-06-01",
            "endDate": "2025-06-05",
            "budget": 1000,
            "notes": null
        }"#;

        let request: SaveTripRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.name, "Paris Trip");
        assert!(request.start_location.id.is_none());
        assert_eq!(request.start_location.name.as_deref(), Some("Berlin"));
        assert!(request.end_location.id.is_some());
        assert_eq!(request.budget, Decimal::from(1000));
        assert!(request.status.is_none());
    }

    #[test]
    fn test_status_request_wire_shape() {
        let request: UpdateTripStatusRequest =
            serde_json::from_str(r#"{"status": "IN_PROGRESS"}"#).unwrap();
        assert_eq!(request.status, TripStatus::InProgress);
    }
}
